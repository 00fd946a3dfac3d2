use thiserror::Error;

/// Why a sequence was rejected as malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("byte {0:#04x} cannot start a sequence")]
    BadLeadByte(u8),
    #[error("byte {0:#04x} is not a continuation byte")]
    BadContinuation(u8),
    #[error("overlong encoding")]
    Overlong,
    #[error("surrogate code point")]
    Surrogate,
    #[error("code point above U+10FFFF")]
    AboveMax,
}

/// Failure to decode a single code point.
///
/// A sequential scanner uses the variant to tell "not enough bytes yet" apart
/// from "these bytes can never be valid".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid UTF-8 at byte {offset}: {reason}")]
    InvalidEncoding { offset: usize, reason: InvalidReason },
    #[error("truncated UTF-8 sequence at byte {offset}: needs {needed} bytes, {available} available")]
    TruncatedSequence {
        offset: usize,
        needed: u8,
        available: usize,
    },
}

impl DecodeError {
    /// Byte offset of the sequence that failed to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::InvalidEncoding { offset, .. }
            | DecodeError::TruncatedSequence { offset, .. } => offset,
        }
    }
}

/// Errors returned by buffer and view operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range (limit {limit})")]
    OutOfRange { index: usize, limit: usize },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to allocate {requested} bytes")]
    AllocationFailure { requested: usize },
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfRange,
    InvalidEncoding,
    TruncatedSequence,
    AllocationFailure,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::Decode(DecodeError::InvalidEncoding { .. }) => ErrorKind::InvalidEncoding,
            Error::Decode(DecodeError::TruncatedSequence { .. }) => ErrorKind::TruncatedSequence,
            Error::AllocationFailure { .. } => ErrorKind::AllocationFailure,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
