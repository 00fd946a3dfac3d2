//! Formatting for buffers and views.
//!
//! `Display` is lossy: each malformed sequence is rendered as U+FFFD. The
//! replacement glyph only exists in the rendered output; decoding never
//! produces it for malformed input, it reports an error instead.

use core::fmt;

use bstr::BStr;

use crate::{buffer::Utf8Buf, read::Utf8Read, view::Utf8View};

/// Renders bytes as space-separated, two-digit lowercase hex.
#[derive(Debug, Clone, Copy)]
pub struct HexBytes<'a>(pub(crate) &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Utf8Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl fmt::Display for Utf8View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl fmt::Debug for Utf8Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utf8Buf")
            .field("bytes", &BStr::new(self.as_bytes()))
            .field("length", &self.byte_length())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Debug for Utf8View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utf8View")
            .field("bytes", &BStr::new(self.as_bytes()))
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use crate::{Utf8Buf, Utf8Read};

    #[test]
    fn hex_lists_every_byte() {
        let buf = Utf8Buf::from("A\u{1F31F}");
        assert_eq!(buf.hex().to_string(), "41 f0 9f 8c 9f");
        assert_eq!(Utf8Buf::new().hex().to_string(), "");
    }

    #[test]
    fn display_replaces_malformed_bytes() {
        let buf = Utf8Buf::from_bytes(b"a\xFFb");
        assert_eq!(buf.to_string(), "a\u{FFFD}b");
        // A genuine replacement character decodes as itself.
        let real = Utf8Buf::from("a\u{FFFD}b");
        assert_eq!(real.decode_at(1).unwrap().ch(), '\u{FFFD}');
        assert!(buf.decode_at(1).is_err());
    }

    #[test]
    fn display_of_view_covers_window_only() {
        let buf = Utf8Buf::from("Hello, world");
        let view = buf.view_bytes(7, 12).unwrap();
        assert_eq!(format!("[{view}]"), "[world]");
    }
}
