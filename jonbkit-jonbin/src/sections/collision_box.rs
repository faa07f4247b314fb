use jonbkit_core::{Deserialize, FixedSize};
use serde::{ser::Error as _, Serialize, Serializer};

/// Axis-aligned rectangle tagged with an identifier. Hurtboxes, hitboxes and the unknown box
/// collection all share this layout.
///
/// Coordinates are read verbatim, so NaN and infinities can occur. JSON has no spelling for
/// them and serializing such a box fails.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, FixedSize, Serialize)]
pub struct CollisionBox {
    pub id: u32,
    #[serde(serialize_with = "serialize_finite")]
    pub x: f32,
    #[serde(serialize_with = "serialize_finite")]
    pub y: f32,
    #[serde(serialize_with = "serialize_finite")]
    pub width: f32,
    #[serde(serialize_with = "serialize_finite")]
    pub height: f32,
}

fn serialize_finite<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return Err(S::Error::custom(format!(
            "coordinate {value} cannot be represented in JSON"
        )));
    }
    serializer.serialize_f32(*value)
}
