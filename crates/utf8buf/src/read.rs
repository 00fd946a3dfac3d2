//! Read operations shared by [`Utf8Buf`](crate::Utf8Buf) and
//! [`Utf8View`].
//!
//! Only [`Utf8Read::as_bytes`] is required; everything else is expressed on
//! top of it through the codec and index modules. There is no mutating
//! method here, so holding a `&impl Utf8Read` never grants write access.

use core::iter::FusedIterator;

use bstr::ByteSlice;

use crate::{
    codec::{self, Decoded},
    display::HexBytes,
    error::{DecodeError, Error, Result},
    index,
    view::Utf8View,
};

/// Read access to a sequence of (possibly malformed) UTF-8 bytes.
pub trait Utf8Read {
    /// The raw bytes, embedded NULs and malformed sequences included.
    fn as_bytes(&self) -> &[u8];

    /// Number of bytes in use.
    fn byte_length(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Number of code points, recomputed on every call.
    ///
    /// # Errors
    ///
    /// Fails with the first decode error if any sequence is malformed.
    fn codepoint_count(&self) -> Result<usize> {
        index::codepoint_count(self.as_bytes())
    }

    /// Decodes the code point starting at `byte_offset`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `byte_offset` is not inside the bytes, or the
    /// decode error at that position.
    fn decode_at(&self, byte_offset: usize) -> Result<Decoded> {
        let bytes = self.as_bytes();
        if byte_offset >= bytes.len() {
            return Err(Error::OutOfRange {
                index: byte_offset,
                limit: bytes.len(),
            });
        }
        Ok(codec::decode_at(bytes, byte_offset)?)
    }

    /// See [`index::codepoint_to_byte`].
    ///
    /// # Errors
    ///
    /// See [`index::codepoint_to_byte`].
    fn codepoint_to_byte(&self, cp_index: usize) -> Result<usize> {
        index::codepoint_to_byte(self.as_bytes(), cp_index)
    }

    /// See [`index::align_forward`].
    ///
    /// # Errors
    ///
    /// See [`index::align_forward`].
    fn align_forward(&self, byte_pos: usize) -> Result<usize> {
        index::align_forward(self.as_bytes(), byte_pos)
    }

    /// See [`index::align_backward`].
    ///
    /// # Errors
    ///
    /// See [`index::align_backward`].
    fn align_backward(&self, byte_pos: usize) -> Result<usize> {
        index::align_backward(self.as_bytes(), byte_pos)
    }

    /// # Errors
    ///
    /// Returns the first malformed or truncated sequence.
    fn validate(&self) -> Result<()> {
        Ok(index::validate(self.as_bytes())?)
    }

    fn codepoints(&self) -> Codepoints<'_> {
        Codepoints::new(self.as_bytes())
    }

    fn char_indices(&self) -> CharIndices<'_> {
        CharIndices::new(self.as_bytes())
    }

    /// Byte offset of the first occurrence of `needle`.
    fn find<B: AsRef<[u8]>>(&self, needle: B) -> Option<usize> {
        self.as_bytes().find(needle)
    }

    /// Read-only window over the half-open byte range `from_byte..till_byte`.
    ///
    /// The window is not aligned to code point boundaries.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `from_byte <= till_byte <= byte_length()`.
    fn view_bytes(&self, from_byte: usize, till_byte: usize) -> Result<Utf8View<'_>> {
        let bytes = self.as_bytes();
        let window = checked_window(bytes, from_byte, till_byte)?;
        Ok(Utf8View::new(window, from_byte))
    }

    /// Read-only window over the half-open code point range `from_cp..till_cp`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `from_cp > till_cp` or `till_cp` is past the
    /// last code point; decode errors met while translating either bound.
    fn view_codepoints(&self, from_cp: usize, till_cp: usize) -> Result<Utf8View<'_>> {
        let (from_byte, till_byte) = codepoint_window(self.as_bytes(), from_cp, till_cp)?;
        self.view_bytes(from_byte, till_byte)
    }

    /// Read-only window over all bytes.
    fn view(&self) -> Utf8View<'_> {
        Utf8View::new(self.as_bytes(), 0)
    }

    /// Space-separated lowercase hex rendering of the bytes.
    fn hex(&self) -> HexBytes<'_> {
        HexBytes(self.as_bytes())
    }

    /// Writes the raw bytes to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error.
    #[cfg(feature = "std")]
    fn write_to<W: std::io::Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(self.as_bytes())
    }
}

/// Byte bounds of the code point range `from_cp..till_cp`, with the end
/// aligned forward.
pub(crate) fn codepoint_window(
    bytes: &[u8],
    from_cp: usize,
    till_cp: usize,
) -> Result<(usize, usize)> {
    if from_cp > till_cp {
        return Err(Error::OutOfRange {
            index: from_cp,
            limit: till_cp,
        });
    }
    let from_byte = index::codepoint_to_byte(bytes, from_cp)?;
    let till_byte = index::codepoint_to_byte(bytes, till_cp)?;
    Ok((from_byte, index::align_forward(bytes, till_byte)?))
}

pub(crate) fn checked_window(bytes: &[u8], from: usize, till: usize) -> Result<&[u8]> {
    if till > bytes.len() {
        return Err(Error::OutOfRange {
            index: till,
            limit: bytes.len(),
        });
    }
    if from > till {
        return Err(Error::OutOfRange {
            index: from,
            limit: till,
        });
    }
    Ok(&bytes[from..till])
}

/// Iterator over the code points of a byte sequence.
///
/// Yields the first decode error it meets and then stops.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    cursor: usize,
    failed: bool,
}

impl<'a> Codepoints<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: 0,
            failed: false,
        }
    }

    /// Byte offset of the next code point to be decoded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Codepoints<'_> {
    type Item = core::result::Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.bytes.len() {
            return None;
        }
        match codec::decode_at(self.bytes, self.cursor) {
            Ok(decoded) => {
                self.cursor += usize::from(decoded.len());
                Some(Ok(decoded.ch()))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Codepoints<'_> {}

/// Like [`Codepoints`], paired with each code point's byte offset.
#[derive(Debug, Clone)]
pub struct CharIndices<'a> {
    inner: Codepoints<'a>,
}

impl<'a> CharIndices<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            inner: Codepoints::new(bytes),
        }
    }
}

impl Iterator for CharIndices<'_> {
    type Item = core::result::Result<(usize, char), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.inner.offset();
        self.inner.next().map(|res| res.map(|ch| (offset, ch)))
    }
}

impl FusedIterator for CharIndices<'_> {}
