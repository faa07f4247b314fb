use jonbkit_core::{primitive::Count16, Deserialize, FixedSize};

/// The block between the header and the first chunk. Its counts govern how many records of
/// each kind follow.
#[derive(Debug, Clone, Deserialize, FixedSize)]
pub struct Counts {
    pub flags: [u8; 3],
    pub reserved: u32,
    pub chunk_count: Count16,
    pub hurtbox_count: Count16,
    pub hitbox_count: Count16,
    pub unknown_box_count: Count16,
    pub unused: i16,
    pub padding: [u16; 39],
}

impl Counts {
    pub fn box_count(&self) -> usize {
        self.hurtbox_count.get() + self.hitbox_count.get() + self.unknown_box_count.get()
    }
}
