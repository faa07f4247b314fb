mod chunk;
mod collision_box;
mod counts;
mod header;

pub use chunk::*;
pub use collision_box::*;
pub use counts::*;
pub use header::*;
