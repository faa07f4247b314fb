//! Decoder for jonbin sprite collision files.

use jonbkit_core::binary::{
    deserialize_prefix, ByteCursor, Deserialize, Deserializer, Error, FixedSize,
    ResultContextExt,
};
use sections::{Chunk, CollisionBox, Counts, Header};
use tracing::{debug, warn};

pub mod document;
pub mod format;
pub mod sections;

#[cfg(test)]
mod testing;

/// Everything a jonbin file holds, decoded in a single pass.
#[derive(Debug, Clone)]
pub struct Jonbin {
    pub header: Header,
    pub counts: Counts,
    pub chunks: Vec<Chunk>,
    pub hurtboxes: Vec<CollisionBox>,
    pub hitboxes: Vec<CollisionBox>,
    pub unknown_boxes: Vec<CollisionBox>,
}

impl Jonbin {
    /// Decodes a whole file. Bytes past the last record are ignored with a warning.
    pub fn parse(buffer: &[u8]) -> Result<Self, Error> {
        let (jonbin, rest) = Self::parse_prefix(buffer)?;
        if !rest.is_empty() {
            warn!(
                "{} trailing bytes after the last record (at {:08x})",
                rest.remaining().len(),
                rest.offset()
            );
        }
        Ok(jonbin)
    }

    /// Decodes from the front of `buffer` and returns the cursor over the bytes that follow.
    pub fn parse_prefix(buffer: &[u8]) -> Result<(Self, ByteCursor<'_>), Error> {
        deserialize_prefix(buffer).context("cannot deserialize jonbin")
    }

    pub fn image_names(&self) -> impl Iterator<Item = &str> {
        self.header.image_names.iter().map(|name| name.as_str())
    }

    /// Number of bytes this file occupies according to its own header and counts.
    pub fn encoded_len(&self) -> usize {
        self.header.encoded_len()
            + Counts::SIZE
            + self.counts.chunk_count.get() * Chunk::SIZE
            + self.counts.box_count() * CollisionBox::SIZE
    }
}

impl Deserialize for Jonbin {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
        let header = deserializer
            .deserialize::<Header>()
            .context("cannot deserialize header")?;
        let counts = deserializer
            .deserialize::<Counts>()
            .context("cannot deserialize record counts")?;
        debug!(
            chunks = counts.chunk_count.get(),
            hurtboxes = counts.hurtbox_count.get(),
            hitboxes = counts.hitbox_count.get(),
            unknown_boxes = counts.unknown_box_count.get(),
            "Deserializing records at {:08x}",
            deserializer.stream_position()
        );

        let chunks = deserializer.deserialize_many(counts.chunk_count.get(), "chunk")?;
        let hurtboxes = deserializer.deserialize_many(counts.hurtbox_count.get(), "hurtbox")?;
        let hitboxes = deserializer.deserialize_many(counts.hitbox_count.get(), "hitbox")?;
        let unknown_boxes =
            deserializer.deserialize_many(counts.unknown_box_count.get(), "unknown box")?;

        Ok(Self {
            header,
            counts,
            chunks,
            hurtboxes,
            hitboxes,
            unknown_boxes,
        })
    }
}
