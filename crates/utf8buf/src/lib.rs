//! Growable, validated UTF-8 byte buffers.
//!
//! A [`Utf8Buf`] owns a sequence of bytes that is expected to be UTF-8 but is
//! never assumed to be. Embedded NULs are ordinary content and malformed
//! sequences are stored verbatim; they only surface as errors when an
//! operation has to decode them. Positions can be given in bytes or in code
//! points, and every range is half-open.
//!
//! ```rust
//! use utf8buf::{Utf8Buf, Utf8Read};
//!
//! let mut buf = Utf8Buf::from("StartEnd");
//! buf.insert_codepoints(5, "Middle")?;
//! assert_eq!(buf, "StartMiddleEnd");
//!
//! let view = buf.view_codepoints(5, 11)?;
//! assert_eq!(view, "Middle");
//! assert_eq!(view.start(), 5);
//!
//! buf.delete_codepoints(0, 5)?;
//! assert_eq!(buf.codepoint_count()?, 9);
//! # Ok::<(), utf8buf::Error>(())
//! ```
//!
//! Read-only [`Utf8View`]s borrow their owner, so the owner cannot change
//! underneath them; [`Utf8View::to_owned`] makes an independent copy.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
pub mod codec;
mod display;
mod error;
pub mod index;
mod options;
mod read;
#[cfg(feature = "serde")]
mod serde_impl;
mod view;

#[cfg(test)]
mod tests;

pub use buffer::Utf8Buf;
pub use codec::Decoded;
pub use display::HexBytes;
pub use error::{DecodeError, Error, ErrorKind, InvalidReason, Result};
pub use options::{BufferOptions, GrowthPolicy};
pub use read::{CharIndices, Codepoints, Utf8Read};
pub use view::Utf8View;
