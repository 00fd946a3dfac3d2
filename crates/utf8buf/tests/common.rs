#![allow(missing_docs)]
#![allow(dead_code)]

/// One code point of each encoded width: 1, 2, 3 and 4 bytes.
pub const MIXED: &str = "aé€😀";

/// Byte offset of every code point boundary in [`MIXED`].
pub const MIXED_BOUNDARIES: [usize; 5] = [0, 1, 3, 6, 10];

/// Malformed inputs paired with the byte offset at which decoding fails.
pub const MALFORMED: &[(&[u8], usize)] = &[
    (b"\xFF", 0),
    (b"ok\x80", 2),
    (b"\xC0\x80", 0),
    (b"ab\xED\xA0\x80", 2),
    (b"\xF4\x90\x80\x80", 0),
    (b"\xE0\x80\xAF", 0),
];

/// Inputs whose last sequence is cut short by the end of the bytes.
pub const TRUNCATED: &[&[u8]] = &[b"\xE2\x82", b"A\xE2\x82", b"\xF0\x9F\x8D"];
