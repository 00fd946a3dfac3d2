//! Translation between code point indices and byte offsets.
//!
//! Everything here scans forward from byte 0 with [`decode_at`]; nothing is
//! cached, so the cost of each call is linear in the prefix it walks.
//!
//! Incomplete input is treated asymmetrically. Counting and
//! translating report a dangling partial sequence as
//! [`DecodeError::TruncatedSequence`], while the alignment helpers treat the
//! end of the bytes as the boundary that closes it.

use crate::{
    codec::decode_at,
    error::{DecodeError, Error, Result},
};

/// Byte offset at which the code point with index `cp_index` starts.
///
/// `cp_index == codepoint_count(bytes)` is valid and yields `bytes.len()`.
///
/// # Errors
///
/// - [`Error::OutOfRange`] if `cp_index` is past the last code point; `limit`
///   carries the number of code points actually present.
/// - [`Error::Decode`] for the first malformed sequence in the scanned prefix.
pub fn codepoint_to_byte(bytes: &[u8], cp_index: usize) -> Result<usize> {
    let mut cursor = 0;
    for consumed in 0..cp_index {
        if cursor >= bytes.len() {
            return Err(Error::OutOfRange {
                index: cp_index,
                limit: consumed,
            });
        }
        cursor += usize::from(decode_at(bytes, cursor)?.len());
    }
    Ok(cursor)
}

/// Number of code points in `bytes`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if any sequence is malformed or truncated.
pub fn codepoint_count(bytes: &[u8]) -> Result<usize> {
    let mut cursor = 0;
    let mut count = 0;
    while cursor < bytes.len() {
        cursor += usize::from(decode_at(bytes, cursor)?.len());
        count += 1;
    }
    Ok(count)
}

/// Checks that every byte belongs to a well-formed sequence.
///
/// # Errors
///
/// Returns the first [`DecodeError`] found.
pub fn validate(bytes: &[u8]) -> core::result::Result<(), DecodeError> {
    let mut cursor = 0;
    while cursor < bytes.len() {
        cursor += usize::from(decode_at(bytes, cursor)?.len());
    }
    Ok(())
}

fn check_position(bytes: &[u8], byte_pos: usize) -> Result<()> {
    if byte_pos > bytes.len() {
        return Err(Error::OutOfRange {
            index: byte_pos,
            limit: bytes.len(),
        });
    }
    Ok(())
}

/// Smallest code point boundary `>= byte_pos`.
///
/// A truncated sequence at the tail is absorbed: the boundary after it is
/// `bytes.len()`.
///
/// # Errors
///
/// - [`Error::OutOfRange`] if `byte_pos > bytes.len()`.
/// - [`Error::Decode`] for a malformed (not merely truncated) sequence met
///   before reaching `byte_pos`.
pub fn align_forward(bytes: &[u8], byte_pos: usize) -> Result<usize> {
    check_position(bytes, byte_pos)?;
    if byte_pos == 0 || byte_pos == bytes.len() {
        return Ok(byte_pos);
    }

    let mut cursor = 0;
    while cursor < byte_pos {
        match decode_at(bytes, cursor) {
            Ok(decoded) => cursor += usize::from(decoded.len()),
            Err(DecodeError::TruncatedSequence { .. }) => return Ok(bytes.len()),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(cursor)
}

/// Largest code point boundary `<= byte_pos`.
///
/// Inside a truncated tail this is the tail's lead byte.
///
/// # Errors
///
/// Same as [`align_forward`].
pub fn align_backward(bytes: &[u8], byte_pos: usize) -> Result<usize> {
    check_position(bytes, byte_pos)?;
    if byte_pos == 0 || byte_pos == bytes.len() {
        return Ok(byte_pos);
    }

    let mut cursor = 0;
    loop {
        let next = match decode_at(bytes, cursor) {
            Ok(decoded) => cursor + usize::from(decoded.len()),
            Err(DecodeError::TruncatedSequence { .. }) => return Ok(cursor),
            Err(e) => return Err(e.into()),
        };
        if next > byte_pos {
            return Ok(cursor);
        }
        cursor = next;
    }
}
