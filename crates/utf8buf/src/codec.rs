//! Bounded decoding of single UTF-8 code points.
//!
//! [`decode`] classifies the lead byte at `offset`, then reads at most the
//! continuation bytes that lead promises. Every continuation read is checked
//! against the caller's bound first, so a sequence cut short by the bound is
//! reported as [`DecodeError::TruncatedSequence`] instead of being completed
//! from whatever follows it in memory.
//!
//! Rejected outright as [`DecodeError::InvalidEncoding`]:
//! - lead bytes outside `00..=7F`, `C2..=DF`, `E0..=EF`, `F0..=F4`
//! - continuation bytes not matching `10xxxxxx`
//! - overlong forms, surrogates (`U+D800..=U+DFFF`) and values above
//!   `U+10FFFF`

use crate::error::{DecodeError, InvalidReason};

const CONTINUATION_MASK: u8 = 0b1100_0000;
const CONTINUATION_TAG: u8 = 0b1000_0000;
const PAYLOAD_MASK: u8 = 0b0011_1111;

/// A successfully decoded code point and the number of bytes it occupied.
///
/// Only the decoder produces values of this type, so `len()` is always one
/// of 1, 2, 3 or 4:
///
/// ```compile_fail
/// let bogus = utf8buf::Decoded { ch: 'a', len: 9 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    ch: char,
    len: u8,
}

impl Decoded {
    #[must_use]
    pub fn ch(self) -> char {
        self.ch
    }

    /// Number of bytes the sequence occupied.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u8 {
        self.len
    }

    /// The code point as an integer.
    #[must_use]
    pub fn scalar(self) -> u32 {
        u32::from(self.ch)
    }
}

/// Number of bytes a sequence starting with `lead` occupies, or `None` if
/// `lead` cannot start a sequence.
#[must_use]
pub fn sequence_len(lead: u8) -> Option<u8> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes the code point starting at `offset`, reading no byte at an index
/// `>= available_len` (nor past the end of `bytes`).
///
/// # Errors
///
/// - [`DecodeError::TruncatedSequence`] if `offset` is at or past the bound,
///   or the lead byte promises more continuation bytes than the bound leaves.
/// - [`DecodeError::InvalidEncoding`] for any structurally malformed
///   sequence.
pub fn decode(bytes: &[u8], available_len: usize, offset: usize) -> Result<Decoded, DecodeError> {
    let window = &bytes[..available_len.min(bytes.len())];

    let Some(&lead) = window.get(offset) else {
        return Err(DecodeError::TruncatedSequence {
            offset,
            needed: 1,
            available: 0,
        });
    };

    let Some(len) = sequence_len(lead) else {
        return Err(DecodeError::InvalidEncoding {
            offset,
            reason: InvalidReason::BadLeadByte(lead),
        });
    };

    if len == 1 {
        return Ok(Decoded {
            ch: char::from(lead),
            len,
        });
    }

    // 110xxxxx, 1110xxxx, 11110xxx: the payload shrinks as the prefix grows.
    let mut value = u32::from(lead & (0x7F >> len));
    for i in 1..usize::from(len) {
        let Some(&byte) = window.get(offset + i) else {
            return Err(DecodeError::TruncatedSequence {
                offset,
                needed: len,
                available: window.len() - offset,
            });
        };
        if byte & CONTINUATION_MASK != CONTINUATION_TAG {
            return Err(DecodeError::InvalidEncoding {
                offset,
                reason: InvalidReason::BadContinuation(byte),
            });
        }
        value = (value << 6) | u32::from(byte & PAYLOAD_MASK);
    }

    let invalid = |reason| DecodeError::InvalidEncoding { offset, reason };

    if (0xD800..=0xDFFF).contains(&value) {
        return Err(invalid(InvalidReason::Surrogate));
    }
    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if value < min {
        return Err(invalid(InvalidReason::Overlong));
    }
    if value > 0x10_FFFF {
        return Err(invalid(InvalidReason::AboveMax));
    }

    char::from_u32(value)
        .map(|ch| Decoded { ch, len })
        .ok_or(invalid(InvalidReason::AboveMax))
}

/// [`decode`] bounded by the length of `bytes`.
///
/// # Errors
///
/// See [`decode`].
#[inline]
pub fn decode_at(bytes: &[u8], offset: usize) -> Result<Decoded, DecodeError> {
    decode(bytes, bytes.len(), offset)
}
