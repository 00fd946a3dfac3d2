//! The owned, growable byte buffer.
//!
//! [`Utf8Buf`] stores arbitrary bytes (embedded NULs and malformed sequences
//! are kept verbatim) and exposes code point addressed mutation on top of the
//! index translator. Every mutation computes all offsets and reserves all
//! memory before touching a byte, so a failed call leaves the buffer exactly
//! as it was.

use alloc::{string::String, vec::Vec};
use core::hash::{Hash, Hasher};

use crate::{
    error::{Error, Result},
    index::codepoint_to_byte,
    options::BufferOptions,
    read::Utf8Read,
};

/// An exclusively owned, growable sequence of UTF-8 bytes.
///
/// `length <= capacity` always holds. Capacity grows geometrically (see
/// [`GrowthPolicy`](crate::GrowthPolicy)), so a run of appends performs a
/// logarithmic number of reallocations.
///
/// Releasing consumes the handle, so a second release does not compile:
///
/// ```compile_fail
/// use utf8buf::Utf8Buf;
///
/// let buf = Utf8Buf::from("Hello");
/// buf.release();
/// buf.release();
/// ```
pub struct Utf8Buf {
    bytes: Vec<u8>,
    options: BufferOptions,
    reallocations: usize,
}

impl Utf8Buf {
    /// Creates an empty buffer without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BufferOptions::default())
    }

    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            bytes: Vec::new(),
            options,
            reallocations: 0,
        }
    }

    /// Creates an empty buffer with room for at least `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            options: BufferOptions::default(),
            reallocations: 0,
        }
    }

    /// Copies `raw` verbatim; length and capacity both equal `raw.len()`.
    #[must_use]
    pub fn from_bytes(raw: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: raw.as_ref().to_vec(),
            options: BufferOptions::default(),
            reallocations: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> BufferOptions {
        self.options
    }

    /// Number of bytes allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Number of times growth has reallocated the storage.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Makes room for `additional` more bytes, growing per the configured
    /// policy if the current capacity is too small.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the allocator refuses or the
    /// configured `max_capacity` would be exceeded. The buffer is unchanged.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let len = self.bytes.len();
        let capacity = self.bytes.capacity();
        let required = len
            .checked_add(additional)
            .ok_or(Error::AllocationFailure {
                requested: usize::MAX,
            })?;
        if required <= capacity {
            return Ok(());
        }

        let mut target = self.options.growth.next_capacity(capacity, required);
        if let Some(max) = self.options.max_capacity {
            if required > max {
                #[cfg(feature = "tracing")]
                tracing::debug!(required, max, "growth refused: capacity limit");
                return Err(Error::AllocationFailure {
                    requested: required,
                });
            }
            target = target.min(max);
        }

        if self.bytes.try_reserve_exact(target - len).is_err() {
            #[cfg(feature = "tracing")]
            tracing::debug!(requested = target, "growth refused: allocator");
            return Err(Error::AllocationFailure { requested: target });
        }
        self.reallocations += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = capacity,
            new_capacity = self.bytes.capacity(),
            length = len,
            "grew buffer"
        );
        Ok(())
    }

    /// Appends `raw` verbatim.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growth fails; the buffer is unchanged.
    pub fn append_bytes(&mut self, raw: impl AsRef<[u8]>) -> Result<()> {
        let raw = raw.as_ref();
        self.reserve(raw.len())?;
        self.bytes.extend_from_slice(raw);
        Ok(())
    }

    /// Appends the bytes `other` holds right now.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growth fails; the buffer is unchanged.
    pub fn append<R: Utf8Read + ?Sized>(&mut self, other: &R) -> Result<()> {
        self.append_bytes(other.as_bytes())
    }

    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growth fails.
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        self.append_bytes(s)
    }

    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growth fails.
    pub fn push_char(&mut self, ch: char) -> Result<()> {
        let mut encoded = [0; 4];
        self.append_bytes(ch.encode_utf8(&mut encoded))
    }

    /// Inserts `content` before the code point with index `at`.
    ///
    /// Inserting at the code point count appends. Only the prefix before `at`
    /// is decoded; `content` is copied verbatim.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] if `at` is past the last code point.
    /// - [`Error::Decode`] for a malformed sequence before `at`.
    /// - [`Error::AllocationFailure`] if growth fails.
    ///
    /// The buffer is unchanged on error.
    pub fn insert_codepoints(&mut self, at: usize, content: impl AsRef<[u8]>) -> Result<()> {
        let content = content.as_ref();
        let at_byte = codepoint_to_byte(&self.bytes, at)?;
        self.reserve(content.len())?;

        self.bytes.extend_from_slice(content);
        self.bytes[at_byte..].rotate_right(content.len());
        Ok(())
    }

    /// Removes the code points in the half-open range `from..till`.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] unless `from <= till` and `till` is at most
    ///   the code point count.
    /// - [`Error::Decode`] for a malformed sequence before `till`.
    ///
    /// The buffer is unchanged on error.
    pub fn delete_codepoints(&mut self, from: usize, till: usize) -> Result<()> {
        if from > till {
            return Err(Error::OutOfRange {
                index: from,
                limit: till,
            });
        }
        let till_byte = codepoint_to_byte(&self.bytes, till)?;
        let from_byte = codepoint_to_byte(&self.bytes[..till_byte], from)?;
        self.remove_span(from_byte, till_byte);
        Ok(())
    }

    /// Removes the bytes in the half-open range `from..till`, without regard
    /// for code point boundaries.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `from <= till <= byte_length()`.
    pub fn delete_bytes(&mut self, from: usize, till: usize) -> Result<()> {
        if till > self.bytes.len() {
            return Err(Error::OutOfRange {
                index: till,
                limit: self.bytes.len(),
            });
        }
        if from > till {
            return Err(Error::OutOfRange {
                index: from,
                limit: till,
            });
        }
        self.remove_span(from, till);
        Ok(())
    }

    fn remove_span(&mut self, from: usize, till: usize) {
        let len = self.bytes.len();
        self.bytes.copy_within(till..len, from);
        self.bytes.truncate(len - (till - from));
    }

    /// Drops the content but keeps the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Frees the buffer. The handle is consumed and cannot be used again.
    pub fn release(self) {
        drop(self);
    }

    /// Transfers the storage out of the buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Utf8Read for Utf8Buf {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Utf8Buf {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Utf8Buf {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            options: self.options,
            reallocations: 0,
        }
    }
}

impl AsRef<[u8]> for Utf8Buf {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for Utf8Buf {
    fn from(s: &str) -> Self {
        Self::from_bytes(s)
    }
}

impl From<&[u8]> for Utf8Buf {
    fn from(raw: &[u8]) -> Self {
        Self::from_bytes(raw)
    }
}

impl From<String> for Utf8Buf {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<Vec<u8>> for Utf8Buf {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            options: BufferOptions::default(),
            reallocations: 0,
        }
    }
}

impl FromIterator<char> for Utf8Buf {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<String>())
    }
}

impl core::fmt::Write for Utf8Buf {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.push_str(s).map_err(|_| core::fmt::Error)
    }
}

impl PartialEq for Utf8Buf {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Utf8Buf {}

impl Hash for Utf8Buf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl PartialEq<str> for Utf8Buf {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Utf8Buf {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Utf8Buf {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for Utf8Buf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}
