use jonbkit_core::{
    binary::{Deserialize, Deserializer, Error, FixedSize, ResultContextExt},
    primitive::{ConstTag, Count16},
    string::FixedString,
};
use tracing::debug;

use crate::format;

pub type JonbinMagic = ConstTag<{ format::JONBIN_MAGIC }>;
pub type ImageName = FixedString<{ format::IMAGE_NAME_LEN }>;

#[derive(Debug, Clone)]
pub struct Header {
    pub magic: JonbinMagic,
    pub image_names: Vec<ImageName>,
}

impl Header {
    pub fn encoded_len(&self) -> usize {
        JonbinMagic::SIZE + Count16::SIZE + self.image_names.len() * ImageName::SIZE
    }
}

impl Deserialize for Header {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
        let magic = deserializer
            .deserialize::<JonbinMagic>()
            .context("cannot deserialize magic tag")?;
        let image_count = deserializer
            .deserialize::<Count16>()
            .context("cannot deserialize image count")?;
        debug!("Deserializing {image_count} image names");
        let image_names = deserializer.deserialize_many(image_count.get(), "image name")?;
        Ok(Self { magic, image_names })
    }
}

#[cfg(test)]
mod tests {
    use jonbkit_core::binary::{deserialize, deserialize_prefix, ErrorKind};

    use crate::testing::Bytes;

    use super::Header;

    #[test]
    fn reads_names_in_order() {
        let buffer = Bytes::new()
            .tag(b"JONB")
            .i16(2)
            .name(b"foo")
            .name(b"bar_01.png")
            .u8(0xaa)
            .finish();
        let (header, rest) = deserialize_prefix::<Header>(&buffer).unwrap();
        let names: Vec<_> = header.image_names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["foo", "bar_01.png"]);
        assert_eq!(header.encoded_len(), 70);
        assert_eq!(rest.offset(), 70);
        assert_eq!(rest.remaining(), &[0xaa]);
    }

    #[test]
    fn empty_name_list() {
        let buffer = Bytes::new().tag(b"JONB").i16(0).finish();
        let header = deserialize::<Header>(&buffer).unwrap();
        assert!(header.image_names.is_empty());
    }

    #[test]
    fn rejects_other_magic() {
        let buffer = Bytes::new().tag(b"BNOJ").i16(1).name(b"foo").finish();
        let error = deserialize::<Header>(&buffer).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::InvalidFormat(_)));
        assert_eq!(error.context_stack(), ["cannot deserialize magic tag"]);
    }

    #[test]
    fn rejects_negative_image_count() {
        let buffer = Bytes::new().tag(b"JONB").i16(-3).finish();
        let error = deserialize::<Header>(&buffer).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::InvalidFormat(_)));
    }

    #[test]
    fn missing_name_is_truncated() {
        let buffer = Bytes::new().tag(b"JONB").i16(2).name(b"foo").finish();
        let error = deserialize::<Header>(&buffer).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::TruncatedInput {
                offset: 38,
                expected: 32,
                available: 0,
            }
        );
        assert_eq!(error.context_stack(), ["cannot deserialize image name 1 (of 2)"]);
    }

    #[test]
    fn non_ascii_name_is_an_encoding_error() {
        let buffer = Bytes::new().tag(b"JONB").i16(1).name(b"\xffoo").finish();
        let error = deserialize::<Header>(&buffer).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::Encoding {
                offset: 6,
                byte: 0xff,
            }
        );
    }
}
