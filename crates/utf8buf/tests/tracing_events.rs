#![expect(missing_docs)]

//! Diagnostic events emitted by buffer growth.
//!
//!   cargo test -p utf8buf --features tracing --test tracing_events

use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use utf8buf::{BufferOptions, Utf8Buf};

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: Vec<(String, u64)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<u64> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|&(_, value)| value)
    }
}

struct EventVisitor<'a>(&'a mut CapturedEvent);

impl tracing::field::Visit for EventVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.message = format!("{value:?}");
        }
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.fields.push((field.name().to_string(), value));
    }
}

struct EventCapture(Arc<Mutex<Vec<CapturedEvent>>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut captured = CapturedEvent {
            level: *event.metadata().level(),
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut EventVisitor(&mut captured));
        self.0.lock().unwrap().push(captured);
    }
}

fn with_captured_events(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture(events.clone()));
    tracing::subscriber::with_default(subscriber, f);
    events.lock().unwrap().clone()
}

#[test]
fn each_reallocation_is_traced() {
    let events = with_captured_events(|| {
        let mut buf = Utf8Buf::new();
        for _ in 0..3 {
            buf.append_bytes("ab").unwrap();
        }
        assert_eq!(buf.reallocations(), 3);
    });

    let grew: Vec<_> = events
        .iter()
        .filter(|e| e.message == "grew buffer")
        .collect();
    assert_eq!(grew.len(), 3);
    assert!(grew.iter().all(|e| e.level == tracing::Level::TRACE));
    // 0 -> 2 -> 4 -> 6
    assert_eq!(grew[0].field("old_capacity"), Some(0));
    assert_eq!(grew[0].field("new_capacity"), Some(2));
    assert_eq!(grew[2].field("length"), Some(4));
}

#[test]
fn refused_growth_is_reported_at_debug() {
    let events = with_captured_events(|| {
        let mut buf = Utf8Buf::with_options(BufferOptions {
            max_capacity: Some(4),
            ..Default::default()
        });
        buf.append_bytes("abcd").unwrap();
        assert!(buf.append_bytes("e").is_err());
    });

    let refused = events
        .iter()
        .find(|e| e.message == "growth refused: capacity limit")
        .expect("refusal event");
    assert_eq!(refused.level, tracing::Level::DEBUG);
    assert_eq!(refused.field("required"), Some(5));
    assert_eq!(refused.field("max"), Some(4));
}
