//! Block mesh data model and operations.
//!
//! # Architecture
//! - [`geometry`]: vertex and triangle primitives
//! - [`BlockMeshPart`]: the geometry of one cull direction
//! - [`BlockMesh`]: transparency, texture paths and seven optional parts
//! - [`merge_block_meshes`]: combines several meshes into one
//! - [`BlockMesh::rotate`]: quarter-turn rotation with cull slot remapping
//! - [`build_cube`]: assembles cube meshes from caller supplied tables
//!
//! # Usage
//! ```
//! use block_mesh_core::{
//!     build_unit_cube, merge_block_meshes, BlockMeshCullDirection, BlockMeshTransparency,
//!     CubeTables,
//! };
//!
//! let json = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/cube_tables.json"));
//! let tables = CubeTables::from_json(json).unwrap();
//! let log = build_unit_cube(
//!     &tables,
//!     ["log_top", "log_top", "log", "log", "log", "log"],
//!     BlockMeshTransparency::FullOpaque,
//! )
//! .unwrap();
//!
//! // Lay the log on its side.
//! let rotated = log.rotate(1, 0).unwrap();
//! assert!(rotated.part(BlockMeshCullDirection::CullNorth).is_some());
//!
//! let merged = merge_block_meshes([&log, &rotated]).unwrap();
//! assert_eq!(merged.textures().len(), 4);
//! ```

mod block_mesh;
mod cube;
pub mod geometry;
mod merge;
mod part;
mod rotate;

pub use block_mesh::{BlockMesh, BlockMeshParts};
pub use cube::{build_cube, build_unit_cube, CubeFace, CubeTables};
pub use geometry::{FloatVec2, FloatVec3, Triangle, Vertex};
pub use merge::merge_block_meshes;
pub use part::BlockMeshPart;
pub use rotate::{rotate_cull_direction, UvRotationTable};
