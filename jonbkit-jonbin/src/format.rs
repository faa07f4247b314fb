//! Constants of the jonbin collision format.

use jonbkit_core::primitive::tag_value;

pub const JONBIN_MAGIC: u32 = tag_value(b"JONB");

/// Width of an image name field in the header.
pub const IMAGE_NAME_LEN: usize = 32;

/// Collision files describe the boxes of exactly one sprite image.
pub const EXPECTED_IMAGE_COUNT: usize = 1;

pub const JONBIN_EXTENSION: &str = "jonbin";
pub const DOCUMENT_EXTENSION: &str = "json";
