//! Human-readable collision document produced from a jonbin file.

use std::path::{Path, PathBuf};

use jonbkit_core::binary::{Error, ErrorKind};
use serde::Serialize;

use crate::{format, sections::CollisionBox, Jonbin};

/// Hurtboxes and hitboxes of a single sprite. Chunks and unknown boxes are not part of the
/// document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionDocument {
    pub hurtboxes: Vec<CollisionBox>,
    pub hitboxes: Vec<CollisionBox>,
}

impl CollisionDocument {
    /// Fails with [`ErrorKind::UnexpectedImageCount`] unless the file names exactly one image.
    pub fn from_jonbin(jonbin: &Jonbin) -> Result<Self, Error> {
        let actual = jonbin.header.image_names.len();
        if actual != format::EXPECTED_IMAGE_COUNT {
            return Err(ErrorKind::UnexpectedImageCount {
                expected: format::EXPECTED_IMAGE_COUNT,
                actual,
            }
            .into());
        }
        Ok(Self::from_jonbin_unchecked(jonbin))
    }

    pub fn from_jonbin_unchecked(jonbin: &Jonbin) -> Self {
        Self {
            hurtboxes: jonbin.hurtboxes.clone(),
            hitboxes: jonbin.hitboxes.clone(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Path of the document written next to `jonbin_path`.
pub fn json_path_for(jonbin_path: &Path) -> PathBuf {
    jonbin_path.with_extension(format::DOCUMENT_EXTENSION)
}
