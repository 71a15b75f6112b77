//! # Cull Direction Module
//!
//! This module defines the seven culling slots of a block mesh and the stable
//! mapping from resource-pack face names to those slots.

use std::{fmt, str::FromStr};

use cgmath::Vector3;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{BlockMeshError, Result};

/// The number of cull direction slots in a block mesh.
pub const CULL_DIRECTION_COUNT: usize = 7;

/// The direction a mesh part is culled by.
///
/// The value of each variant is the index of its slot in the mesh parts array.
/// `CullNone` holds geometry that is never hidden by neighbouring blocks, the
/// other six hold geometry hidden when the neighbour in that direction is opaque.
#[derive(
    PartialEq, Eq, Hash, Copy, Clone, Debug, PartialOrd, Ord, FromPrimitive, Serialize, Deserialize,
)]
pub enum BlockMeshCullDirection {
    /// Is not culled by any neighbouring blocks.
    CullNone = 0,

    /// Is culled by an opaque block above (+Y).
    CullUp = 1,

    /// Is culled by an opaque block below (-Y).
    CullDown = 2,

    /// Is culled by an opaque block to the north (-Z).
    CullNorth = 3,

    /// Is culled by an opaque block to the east (+X).
    CullEast = 4,

    /// Is culled by an opaque block to the south (+Z).
    CullSouth = 5,

    /// Is culled by an opaque block to the west (-X).
    CullWest = 6,
}

/// Maps resource-pack face names to cull directions.
///
/// A missing cull face (`None`) maps to [`BlockMeshCullDirection::CullNone`],
/// see [`BlockMeshCullDirection::from_face_key`].
pub static FACE_KEYS: phf::Map<&'static str, BlockMeshCullDirection> = phf::phf_map! {
    "none" => BlockMeshCullDirection::CullNone,
    "up" => BlockMeshCullDirection::CullUp,
    "down" => BlockMeshCullDirection::CullDown,
    "north" => BlockMeshCullDirection::CullNorth,
    "east" => BlockMeshCullDirection::CullEast,
    "south" => BlockMeshCullDirection::CullSouth,
    "west" => BlockMeshCullDirection::CullWest,
};

impl BlockMeshCullDirection {
    /// Returns all seven directions in slot order.
    pub fn all() -> [BlockMeshCullDirection; CULL_DIRECTION_COUNT] {
        [
            BlockMeshCullDirection::CullNone,
            BlockMeshCullDirection::CullUp,
            BlockMeshCullDirection::CullDown,
            BlockMeshCullDirection::CullNorth,
            BlockMeshCullDirection::CullEast,
            BlockMeshCullDirection::CullSouth,
            BlockMeshCullDirection::CullWest,
        ]
    }

    /// Returns the six directional slots (everything except `CullNone`).
    pub fn sides() -> [BlockMeshCullDirection; 6] {
        [
            BlockMeshCullDirection::CullUp,
            BlockMeshCullDirection::CullDown,
            BlockMeshCullDirection::CullNorth,
            BlockMeshCullDirection::CullEast,
            BlockMeshCullDirection::CullSouth,
            BlockMeshCullDirection::CullWest,
        ]
    }

    /// The slot index of this direction in a block mesh.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a slot index back to a direction.
    ///
    /// # Returns
    /// `None` if `index` is not below [`CULL_DIRECTION_COUNT`].
    pub fn from_index(index: usize) -> Option<Self> {
        num_traits::FromPrimitive::from_usize(index)
    }

    /// Looks up a resource-pack cull face name.
    ///
    /// `None` (no cull face given) is the same as `"none"`.
    ///
    /// # Errors
    /// [`BlockMeshError::UnknownFaceKey`] if the name is not a known face.
    pub fn from_face_key(key: Option<&str>) -> Result<Self> {
        match key {
            None => Ok(BlockMeshCullDirection::CullNone),
            Some(name) => FACE_KEYS
                .get(name)
                .copied()
                .ok_or_else(|| BlockMeshError::UnknownFaceKey(name.to_string())),
        }
    }

    /// The resource-pack face name of this direction.
    pub fn face_key(self) -> &'static str {
        match self {
            BlockMeshCullDirection::CullNone => "none",
            BlockMeshCullDirection::CullUp => "up",
            BlockMeshCullDirection::CullDown => "down",
            BlockMeshCullDirection::CullNorth => "north",
            BlockMeshCullDirection::CullEast => "east",
            BlockMeshCullDirection::CullSouth => "south",
            BlockMeshCullDirection::CullWest => "west",
        }
    }

    /// The outward unit normal of the face this direction culls against.
    ///
    /// `CullNone` is directionless and has no normal.
    pub fn normal(self) -> Option<Vector3<f32>> {
        match self {
            BlockMeshCullDirection::CullNone => None,
            BlockMeshCullDirection::CullUp => Some(Vector3::new(0.0, 1.0, 0.0)),
            BlockMeshCullDirection::CullDown => Some(Vector3::new(0.0, -1.0, 0.0)),
            BlockMeshCullDirection::CullNorth => Some(Vector3::new(0.0, 0.0, -1.0)),
            BlockMeshCullDirection::CullEast => Some(Vector3::new(1.0, 0.0, 0.0)),
            BlockMeshCullDirection::CullSouth => Some(Vector3::new(0.0, 0.0, 1.0)),
            BlockMeshCullDirection::CullWest => Some(Vector3::new(-1.0, 0.0, 0.0)),
        }
    }

    /// Finds the side whose normal matches an axis-aligned unit vector.
    ///
    /// # Returns
    /// `None` if the vector is not one of the six axis directions.
    pub fn from_normal(normal: Vector3<f32>) -> Option<Self> {
        Self::sides()
            .into_iter()
            .find(|side| side.normal() == Some(normal))
    }
}

impl fmt::Display for BlockMeshCullDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.face_key())
    }
}

impl FromStr for BlockMeshCullDirection {
    type Err = BlockMeshError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_face_key(Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_match_variant_order() {
        for (index, direction) in BlockMeshCullDirection::all().into_iter().enumerate() {
            assert_eq!(direction.index(), index);
            assert_eq!(BlockMeshCullDirection::from_index(index), Some(direction));
        }
        assert_eq!(BlockMeshCullDirection::from_index(CULL_DIRECTION_COUNT), None);
    }

    #[test]
    fn face_keys_round_trip() {
        assert_eq!(FACE_KEYS.len(), CULL_DIRECTION_COUNT);
        for direction in BlockMeshCullDirection::all() {
            let key = direction.face_key();
            assert_eq!(FACE_KEYS.get(key), Some(&direction));
            assert_eq!(key.parse::<BlockMeshCullDirection>(), Ok(direction));
            assert_eq!(direction.to_string(), key);
        }
    }

    #[test]
    fn missing_face_key_is_cull_none() {
        assert_eq!(
            BlockMeshCullDirection::from_face_key(None),
            Ok(BlockMeshCullDirection::CullNone)
        );
    }

    #[test]
    fn unknown_face_key_is_rejected() {
        assert_eq!(
            BlockMeshCullDirection::from_face_key(Some("sideways")),
            Err(BlockMeshError::UnknownFaceKey("sideways".to_string()))
        );
        assert!("Up".parse::<BlockMeshCullDirection>().is_err());
    }

    #[test]
    fn normals_map_back_to_sides() {
        for side in BlockMeshCullDirection::sides() {
            let normal = side.normal().unwrap();
            assert_eq!(BlockMeshCullDirection::from_normal(normal), Some(side));
        }
        assert_eq!(BlockMeshCullDirection::CullNone.normal(), None);
        assert_eq!(
            BlockMeshCullDirection::from_normal(Vector3::new(1.0, 1.0, 0.0)),
            None
        );
    }
}
