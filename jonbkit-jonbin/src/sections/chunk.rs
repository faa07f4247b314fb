use jonbkit_core::{Deserialize, FixedSize};

/// Sprite geometry record. The meaning of most fields is unknown, so they are kept as read.
#[derive(Debug, Clone, PartialEq, Deserialize, FixedSize)]
pub struct Chunk {
    pub src_x: f32,
    pub src_y: f32,
    pub src_width: f32,
    pub src_height: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub unknown1: [u32; 8],
    pub layer: u32,
    pub unknown2: [u32; 3],
}
