//! `serde` support: buffers and views serialize as byte strings; buffers
//! deserialize from byte strings, strings, or sequences of bytes.

use alloc::vec::Vec;
use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::{buffer::Utf8Buf, read::Utf8Read, view::Utf8View};

impl Serialize for Utf8Buf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl Serialize for Utf8View<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

/// Upper bound on bytes reserved up front from a sequence's size hint.
const MAX_PREALLOC: usize = 4096;

struct Utf8BufVisitor;

impl<'de> Visitor<'de> for Utf8BufVisitor {
    type Value = Utf8Buf;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string, a string, or a sequence of bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Utf8Buf, E> {
        Ok(Utf8Buf::from_bytes(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Utf8Buf, E> {
        Ok(Utf8Buf::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Utf8Buf, E> {
        Ok(Utf8Buf::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Utf8Buf, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOC));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(Utf8Buf::from(bytes))
    }
}

impl<'de> Deserialize<'de> for Utf8Buf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(Utf8BufVisitor)
    }
}
