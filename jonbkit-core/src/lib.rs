pub mod binary;
pub mod primitive;
pub mod string;

pub use jonbkit_core_derive::*;
