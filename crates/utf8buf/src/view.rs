use crate::{
    buffer::Utf8Buf,
    error::Result,
    read::{CharIndices, Codepoints, Utf8Read, checked_window, codepoint_window},
};

/// A borrowed, read-only window into a [`Utf8Buf`].
///
/// The lifetime ties the view to a shared borrow of its owner, so the owner
/// cannot be mutated, reallocated or released while the view is alive:
///
/// ```compile_fail
/// use utf8buf::{Utf8Buf, Utf8Read};
///
/// let mut owner = Utf8Buf::from("Parent");
/// let child = owner.view_bytes(0, 4).unwrap();
/// owner.append_bytes("Modified").unwrap();
/// assert_eq!(child, "Pare");
/// ```
///
/// A view has no mutating methods at all:
///
/// ```compile_fail
/// use utf8buf::{Utf8Buf, Utf8Read};
///
/// let owner = Utf8Buf::from("Hello");
/// let mut view = owner.view();
/// view.append_bytes("!").unwrap();
/// ```
#[derive(Clone, Copy)]
pub struct Utf8View<'a> {
    bytes: &'a [u8],
    start: usize,
}

impl<'a> Utf8View<'a> {
    pub(crate) fn new(bytes: &'a [u8], start: usize) -> Self {
        Self { bytes, start }
    }

    /// Offset of the first byte of this view within its owning buffer.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last byte of this view within its owning buffer.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }

    /// The viewed bytes, for as long as the owner is borrowed.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Like [`Utf8Read::view_bytes`], but the sub-view borrows the owner
    /// rather than this view, so it may outlive `self`.
    ///
    /// # Errors
    ///
    /// See [`Utf8Read::view_bytes`].
    pub fn view_bytes(&self, from_byte: usize, till_byte: usize) -> Result<Utf8View<'a>> {
        let window = checked_window(self.bytes, from_byte, till_byte)?;
        Ok(Utf8View::new(window, self.start + from_byte))
    }

    /// Owner-lifetime counterpart of [`Utf8Read::view_codepoints`].
    ///
    /// # Errors
    ///
    /// See [`Utf8Read::view_codepoints`].
    pub fn view_codepoints(&self, from_cp: usize, till_cp: usize) -> Result<Utf8View<'a>> {
        let (from_byte, till_byte) = codepoint_window(self.bytes, from_cp, till_cp)?;
        self.view_bytes(from_byte, till_byte)
    }

    #[must_use]
    pub fn view(&self) -> Utf8View<'a> {
        *self
    }

    pub fn codepoints(&self) -> Codepoints<'a> {
        Codepoints::new(self.bytes)
    }

    pub fn char_indices(&self) -> CharIndices<'a> {
        CharIndices::new(self.bytes)
    }

    /// Copies the viewed bytes into a new, independent buffer.
    #[must_use]
    pub fn to_owned(self) -> Utf8Buf {
        Utf8Buf::from_bytes(self.bytes)
    }
}

impl Utf8Read for Utf8View<'_> {
    fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    fn view_bytes(&self, from_byte: usize, till_byte: usize) -> Result<Utf8View<'_>> {
        Utf8View::view_bytes(self, from_byte, till_byte)
    }

    fn view_codepoints(&self, from_cp: usize, till_cp: usize) -> Result<Utf8View<'_>> {
        Utf8View::view_codepoints(self, from_cp, till_cp)
    }

    fn view(&self) -> Utf8View<'_> {
        *self
    }

    fn codepoints(&self) -> Codepoints<'_> {
        Utf8View::codepoints(self)
    }

    fn char_indices(&self) -> CharIndices<'_> {
        Utf8View::char_indices(self)
    }
}

impl AsRef<[u8]> for Utf8View<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl From<Utf8View<'_>> for Utf8Buf {
    fn from(view: Utf8View<'_>) -> Self {
        view.to_owned()
    }
}

impl PartialEq for Utf8View<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Utf8View<'_> {}

impl PartialEq<str> for Utf8View<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Utf8View<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Utf8View<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<Utf8Buf> for Utf8View<'_> {
    fn eq(&self, other: &Utf8Buf) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<Utf8View<'_>> for Utf8Buf {
    fn eq(&self, other: &Utf8View<'_>) -> bool {
        self.as_bytes() == other.bytes
    }
}
