use std::fmt;

use crate::binary::{Deserialize, Deserializer, Error, ErrorKind, FixedSize, ResultContextExt};

/// Four-byte tag that must appear verbatim in the stream. `VALUE` holds the tag's bytes read as
/// a little-endian `u32`, see [`tag_value`].
///
/// During deserialization, any other four bytes are an [`ErrorKind::InvalidFormat`] error.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ConstTag<const VALUE: u32>;

pub const fn tag_value(tag: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*tag)
}

impl<const VALUE: u32> ConstTag<VALUE> {
    pub fn bytes(&self) -> [u8; 4] {
        VALUE.to_le_bytes()
    }
}

impl<const VALUE: u32> Deserialize for ConstTag<VALUE> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
        let got = deserializer.read_array::<4>()?;
        let expected = VALUE.to_le_bytes();
        if got != expected {
            Err(ErrorKind::invalid_format(format!(
                "tag \"{}\" expected, but got \"{}\"",
                expected.escape_ascii(),
                got.escape_ascii()
            )))
        } else {
            Ok(Self)
        }
    }
}

impl<const VALUE: u32> FixedSize for ConstTag<VALUE> {
    const SIZE: usize = 4;
}

impl<const VALUE: u32> fmt::Debug for ConstTag<VALUE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.bytes().escape_ascii())
    }
}

impl<const VALUE: u32> fmt::Display for ConstTag<VALUE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes().escape_ascii())
    }
}

/// Record count stored as a signed 16-bit integer. Negative values are rejected.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Count16(u16);

impl Count16 {
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Deserialize for Count16 {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
        let underlying = deserializer
            .deserialize::<i16>()
            .context("cannot deserialize Count16")?;
        u16::try_from(underlying).map(Self).map_err(|_| {
            ErrorKind::invalid_format(format!(
                "count must not be negative, but got {underlying}"
            ))
        })
    }
}

impl FixedSize for Count16 {
    const SIZE: usize = 2;
}

impl fmt::Debug for Count16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Count16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
