#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! # Block Mesh Core
//!
//! Triangle meshes for single voxel-style blocks, as used by a resource-pack
//! renderer.
//!
//! A block mesh holds its geometry in seven slots keyed by cull direction, so
//! a renderer can drop whole slots when the neighbouring block on that side is
//! opaque. This crate provides the data model and the two operations built on
//! it:
//!
//! * **Merge** - combine the meshes of a block stack into one mesh
//! * **Rotate** - turn a mesh in 90 degree steps about the x and y axis while
//!   keeping cull slots, texture coordinates and winding consistent
//!
//! ## Key Modules
//!
//! * `block` - Cull directions, face names and transparency classes
//! * `mesh` - Geometry primitives, block meshes, merging, rotation and cube building
//! * `error` - The error type shared by every operation
//!
//! ## Usage
//!
//! ```rust
//! use block_mesh_core::{
//!     merge_block_meshes, BlockMesh, BlockMeshCullDirection, BlockMeshPart,
//!     BlockMeshTransparency, FloatVec2, FloatVec3, Triangle, Vertex,
//! };
//!
//! let vertex = |x: f32, y: f32| {
//!     Vertex::new(FloatVec3::new(x, y, 0.0), FloatVec2::new(x, y), FloatVec3::new(1.0, 1.0, 1.0))
//! };
//! let part = BlockMeshPart::new(
//!     vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 1.0)],
//!     vec![Triangle::new(0, 1, 2, 0)],
//! );
//! let mut parts: [Option<BlockMeshPart>; 7] = Default::default();
//! parts[BlockMeshCullDirection::CullNorth.index()] = Some(part);
//! let mesh = BlockMesh::try_new(BlockMeshTransparency::Partial, vec!["glass.png".into()], parts)?;
//!
//! let turned = mesh.rotate(0, 2)?;
//! assert!(turned.part(BlockMeshCullDirection::CullSouth).is_some());
//!
//! let merged = merge_block_meshes([&mesh, &turned])?;
//! assert_eq!(merged.textures(), &["glass.png", "glass.png"]);
//! # Ok::<(), block_mesh_core::BlockMeshError>(())
//! ```
//!
//! ## Thread Safety
//!
//! Every type is plain owned data and every operation returns a new value, so
//! meshes can be shared across threads and processed in parallel freely.

pub mod block;
pub mod error;
pub mod mesh;

pub use block::{BlockMeshCullDirection, BlockMeshTransparency, CULL_DIRECTION_COUNT, FACE_KEYS};
pub use error::{BlockMeshError, IndexKind, Result};
pub use mesh::{
    build_cube, build_unit_cube, merge_block_meshes, rotate_cull_direction, BlockMesh,
    BlockMeshPart, BlockMeshParts, CubeFace, CubeTables, FloatVec2, FloatVec3, Triangle,
    UvRotationTable, Vertex,
};
