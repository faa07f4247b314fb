//! Assembles jonbin buffers field by field for tests.

use crate::format;

#[derive(Debug, Default)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Vec<u8> {
        self.0
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn tag(self, tag: &[u8; 4]) -> Self {
        self.raw(tag)
    }

    pub fn u8(self, value: u8) -> Self {
        self.raw(&[value])
    }

    pub fn i16(self, value: i16) -> Self {
        self.raw(&value.to_le_bytes())
    }

    pub fn u16(self, value: u16) -> Self {
        self.raw(&value.to_le_bytes())
    }

    pub fn u32(self, value: u32) -> Self {
        self.raw(&value.to_le_bytes())
    }

    pub fn u32s(self, values: &[u32]) -> Self {
        values.iter().fold(self, |bytes, &value| bytes.u32(value))
    }

    pub fn f32s(self, values: &[f32]) -> Self {
        values
            .iter()
            .fold(self, |bytes, value| bytes.raw(&value.to_le_bytes()))
    }

    /// Name field, NUL-padded to its full width.
    pub fn name(self, name: &[u8]) -> Self {
        let mut field = [0; format::IMAGE_NAME_LEN];
        field[..name.len()].copy_from_slice(name);
        self.raw(&field)
    }

    pub fn header<N: AsRef<[u8]>>(self, names: &[N]) -> Self {
        let bytes = self.tag(b"JONB").i16(names.len() as i16);
        names.iter().fold(bytes, |bytes, name| bytes.name(name.as_ref()))
    }

    pub fn counts(self, chunks: i16, hurtboxes: i16, hitboxes: i16, unknown_boxes: i16) -> Self {
        self.counts_with_reserved(0, chunks, hurtboxes, hitboxes, unknown_boxes, 0)
    }

    pub fn counts_with_reserved(
        self,
        reserved: u32,
        chunks: i16,
        hurtboxes: i16,
        hitboxes: i16,
        unknown_boxes: i16,
        unused: i16,
    ) -> Self {
        let bytes = self
            .raw(&[1, 2, 3])
            .u32(reserved)
            .i16(chunks)
            .i16(hurtboxes)
            .i16(hitboxes)
            .i16(unknown_boxes)
            .i16(unused);
        (0..39).fold(bytes, |bytes, i| bytes.u16(0x100 + i))
    }

    /// Chunk whose fields are all derived from `seed`, so chunks can be told apart.
    pub fn chunk(self, seed: u32) -> Self {
        let base = seed as f32;
        self.f32s(&[base; 8])
            .u32s(&[seed; 8])
            .u32(seed)
            .u32s(&[seed; 3])
    }

    pub fn collision_box(self, id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.u32(id).f32s(&[x, y, width, height])
    }
}
