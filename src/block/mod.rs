//! # Block Module
//!
//! Block-level classification shared by every mesh: which neighbour hides a
//! piece of geometry, and how much of the voxel cell the block occupies.

pub mod cull_direction;
pub mod transparency;

pub use cull_direction::{BlockMeshCullDirection, CULL_DIRECTION_COUNT, FACE_KEYS};
pub use transparency::BlockMeshTransparency;
