#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8buf::{Utf8Buf, Utf8Read};

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    Insert { at: u16, content: Vec<u8> },
    DeleteCodepoints { from: u16, till: u16 },
    DeleteBytes { from: u16, till: u16 },
    ViewCodepoints { from: u16, till: u16 },
    AlignForward(u16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial: Vec<u8>,
    ops: Vec<Op>,
}

/// Reference translation built on `<[u8]>::utf8_chunks`: the byte offset of
/// code point `cp`, or `None` if it is past the end or a malformed sequence
/// comes first.
fn model_codepoint_to_byte(bytes: &[u8], cp: usize) -> Option<usize> {
    let mut offset = 0;
    let mut seen = 0;
    for chunk in bytes.utf8_chunks() {
        for (i, _) in chunk.valid().char_indices() {
            if seen == cp {
                return Some(offset + i);
            }
            seen += 1;
        }
        offset += chunk.valid().len();
        if !chunk.invalid().is_empty() {
            return (seen == cp).then_some(offset);
        }
    }
    (seen == cp).then_some(offset)
}

fn run(input: Input) {
    let mut model = input.initial;
    let mut buf = Utf8Buf::from_bytes(&model);

    for op in input.ops {
        match op {
            Op::Append(raw) => {
                buf.append_bytes(&raw).unwrap();
                model.extend_from_slice(&raw);
            }
            Op::Insert { at, content } => {
                let at = usize::from(at);
                let res = buf.insert_codepoints(at, &content);
                match model_codepoint_to_byte(&model, at) {
                    Some(split) => {
                        res.unwrap();
                        model.splice(split..split, content);
                    }
                    None => assert!(res.is_err(), "insert at {at} should fail"),
                }
            }
            Op::DeleteCodepoints { from, till } => {
                let (from, till) = (usize::from(from), usize::from(till));
                let res = buf.delete_codepoints(from, till);
                let span = (from <= till)
                    .then(|| model_codepoint_to_byte(&model, from))
                    .flatten()
                    .zip(model_codepoint_to_byte(&model, till));
                match span {
                    Some((a, b)) => {
                        res.unwrap();
                        model.drain(a..b);
                    }
                    None => assert!(res.is_err(), "delete {from}..{till} should fail"),
                }
            }
            Op::DeleteBytes { from, till } => {
                let (from, till) = (usize::from(from), usize::from(till));
                let res = buf.delete_bytes(from, till);
                if from <= till && till <= model.len() {
                    res.unwrap();
                    model.drain(from..till);
                } else {
                    assert!(res.is_err());
                }
            }
            Op::ViewCodepoints { from, till } => {
                let (from, till) = (usize::from(from), usize::from(till));
                if let Ok(view) = buf.view_codepoints(from, till) {
                    assert!(view.end() <= model.len());
                    assert_eq!(view.as_bytes(), &model[view.start()..view.end()]);
                }
            }
            Op::AlignForward(pos) => {
                let pos = usize::from(pos);
                if let Ok(aligned) = buf.align_forward(pos) {
                    assert!(pos <= aligned && aligned <= model.len());
                    assert_eq!(buf.align_forward(aligned).ok(), Some(aligned));
                }
            }
            Op::Clear => {
                buf.clear();
                model.clear();
            }
        }

        assert_eq!(buf.as_bytes(), model.as_slice());
        assert!(buf.byte_length() <= buf.capacity());
    }
}

fuzz_target!(|input: Input| run(input));
