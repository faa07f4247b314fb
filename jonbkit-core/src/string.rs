use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

use crate::binary::{Deserialize, Deserializer, Error, ErrorKind, FixedSize};

/// String stored in a field of exactly `N` bytes, padded at the end with NULs.
///
/// Only ASCII is accepted. The padding is stripped on deserialization, so a field with no NUL at
/// all yields the full `N` characters.
#[derive(Clone, PartialEq, Eq, Default, Hash)]
pub struct FixedString<const N: usize> {
    string: String,
}

impl<const N: usize> FixedString<N> {
    pub fn as_str(&self) -> &str {
        &self.string
    }
}

impl<const N: usize> Debug for FixedString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.string, f)
    }
}

impl<const N: usize> Display for FixedString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.string, f)
    }
}

impl<const N: usize> Deref for FixedString<N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.string
    }
}

impl<const N: usize> Deserialize for FixedString<N> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
        let start = deserializer.stream_position();
        let bytes = deserializer.read_bytes(N)?;
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let content = &bytes[..end];
        if let Some(i) = content.iter().position(|b| !b.is_ascii()) {
            return Err(ErrorKind::Encoding {
                offset: start + i,
                byte: content[i],
            }
            .into());
        }
        let string = content.iter().map(|&b| char::from(b)).collect();
        Ok(Self { string })
    }
}

impl<const N: usize> FixedSize for FixedString<N> {
    const SIZE: usize = N;
}

#[cfg(test)]
mod tests {
    use crate::binary::{deserialize, deserialize_prefix, ErrorKind, FixedSize};

    use super::FixedString;

    fn padded(text: &[u8]) -> [u8; 32] {
        let mut field = [0; 32];
        field[..text.len()].copy_from_slice(text);
        field
    }

    #[test]
    fn strips_trailing_padding() {
        let field = padded(b"foo");
        let (name, rest) = deserialize_prefix::<FixedString<32>>(&field).unwrap();
        assert_eq!(name.as_str(), "foo");
        assert_eq!(rest.offset(), 32);
    }

    #[test]
    fn unpadded_field_keeps_every_character() {
        let text = b"abcdefghijklmnopqrstuvwxyz012345";
        let name = deserialize::<FixedString<32>>(text).unwrap();
        assert_eq!(name.len(), 32);
        assert_eq!(name.as_str(), "abcdefghijklmnopqrstuvwxyz012345");
    }

    #[test]
    fn interior_nul_is_kept() {
        let name = deserialize::<FixedString<32>>(&padded(b"a\0b")).unwrap();
        assert_eq!(name.as_str(), "a\0b");
    }

    #[test]
    fn all_padding_is_empty() {
        let name = deserialize::<FixedString<32>>(&[0; 32]).unwrap();
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn non_ascii_is_rejected() {
        let error = deserialize::<FixedString<32>>(&padded(b"caf\xe9.png")).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::Encoding {
                offset: 3,
                byte: 0xe9,
            }
        );
    }

    #[test]
    fn short_field_is_truncated() {
        let error = deserialize::<FixedString<32>>(b"foo").unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::TruncatedInput {
                offset: 0,
                expected: 32,
                available: 3,
            }
        );
    }

    #[test]
    fn size_is_field_width() {
        assert_eq!(<FixedString<32> as FixedSize>::SIZE, 32);
    }
}
