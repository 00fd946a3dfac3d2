#![expect(missing_docs)]

mod common;

use rstest::rstest;
use utf8buf::{
    BufferOptions, DecodeError, Error, ErrorKind, GrowthPolicy, Utf8Buf, Utf8Read, Utf8View,
};

use crate::common::{MALFORMED, MIXED, MIXED_BOUNDARIES, TRUNCATED};

#[test]
fn create_append_insert_delete() {
    let mut buf = Utf8Buf::from("Hello");
    assert_eq!(buf.byte_length(), 5);
    assert!(buf.capacity() >= 5);

    buf.append(&Utf8Buf::from(" 世界")).unwrap();
    assert_eq!(buf, "Hello 世界");
    assert_eq!(buf.byte_length(), 5 + 7);

    buf.append_bytes("!").unwrap();
    assert_eq!(buf, "Hello 世界!");
    assert_eq!(buf.codepoint_count(), Ok(9));

    buf.insert_codepoints(6, "大").unwrap();
    assert_eq!(buf, "Hello 大世界!");
    buf.delete_codepoints(0, 6).unwrap();
    assert_eq!(buf, "大世界!");
}

#[test]
fn boundaries_of_mixed_widths() {
    let buf = Utf8Buf::from(MIXED);
    for (cp, byte) in MIXED_BOUNDARIES.into_iter().enumerate() {
        assert_eq!(buf.codepoint_to_byte(cp), Ok(byte), "code point {cp}");
        assert_eq!(buf.align_forward(byte), Ok(byte));
        assert_eq!(buf.align_backward(byte), Ok(byte));
    }
    // Interior bytes of '😀' align outward.
    for pos in 7..10 {
        assert_eq!(buf.align_forward(pos), Ok(10));
        assert_eq!(buf.align_backward(pos), Ok(6));
    }
}

#[rstest]
#[case::bad_lead(0)]
#[case::stray_continuation(1)]
#[case::overlong_nul(2)]
#[case::surrogate(3)]
#[case::above_max(4)]
#[case::overlong_three(5)]
fn malformed_input_is_stored_but_not_counted(#[case] which: usize) {
    let (bytes, offset) = MALFORMED[which];
    let buf = Utf8Buf::from_bytes(bytes);
    assert_eq!(buf.as_bytes(), bytes);

    let err = buf.codepoint_count().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
    match err {
        Error::Decode(decode) => assert_eq!(decode.offset(), offset),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[case::three_byte(0)]
#[case::after_ascii(1)]
#[case::four_byte(2)]
fn truncated_tail_is_counted_as_error_but_aligned_over(#[case] which: usize) {
    let bytes = TRUNCATED[which];
    let buf = Utf8Buf::from_bytes(bytes);
    assert_eq!(
        buf.codepoint_count().map_err(|e| e.kind()),
        Err(ErrorKind::TruncatedSequence)
    );
    assert_eq!(buf.align_forward(bytes.len() - 1), Ok(bytes.len()));
}

#[test]
fn views_are_read_only_windows() {
    let owner = Utf8Buf::from("Hello, 世界");
    let view: Utf8View<'_> = owner.view_codepoints(7, 9).unwrap();
    assert_eq!(view, "世界");
    assert_eq!((view.start(), view.end()), (7, 13));
    assert_eq!(view.codepoint_count(), Ok(2));
    assert_eq!(view.decode_at(3).unwrap().ch(), '界');

    let copy = view.to_owned();
    drop(owner);
    assert_eq!(copy, "世界");
}

#[test]
fn decode_error_reports_what_was_missing() {
    let buf = Utf8Buf::from_bytes(b"ab\xE2\x82");
    assert_eq!(
        buf.decode_at(2),
        Err(Error::Decode(DecodeError::TruncatedSequence {
            offset: 2,
            needed: 3,
            available: 2,
        }))
    );
}

#[test]
fn capacity_limit_is_enforced_atomically() {
    let mut buf = Utf8Buf::with_options(BufferOptions {
        max_capacity: Some(6),
        growth: GrowthPolicy::Double,
    });
    buf.append_bytes("abcd").unwrap();
    assert_eq!(
        buf.insert_codepoints(2, "xyz"),
        Err(Error::AllocationFailure { requested: 7 })
    );
    assert_eq!(buf, "abcd");
    buf.insert_codepoints(2, "xy").unwrap();
    assert_eq!(buf, "abxycd");
    assert_eq!(buf.capacity(), 6);
}

#[test]
fn formatting_appends_through_fmt_write() {
    use core::fmt::Write;

    let mut buf = Utf8Buf::new();
    write!(buf, "{}-{:03}", "id", 7).unwrap();
    assert_eq!(buf, "id-007");
}

#[test]
fn collects_from_chars() {
    let buf: Utf8Buf = "naïve".chars().rev().collect();
    assert_eq!(buf, "evïan");
}
