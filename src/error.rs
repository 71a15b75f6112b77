//! # Error Module
//!
//! All failures produced by mesh construction, merging, rotation and cube building.

use std::fmt;

use thiserror::Error;

/// What an out-of-range index was pointing into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexKind {
    /// A triangle corner indexing the vertex list of its part.
    Vertex,
    /// A triangle texture index into the mesh texture list.
    Texture,
    /// An entry of a cube lookup table.
    Table,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Vertex => write!(f, "vertex"),
            IndexKind::Texture => write!(f, "texture"),
            IndexKind::Table => write!(f, "lookup table"),
        }
    }
}

/// Errors raised by block mesh operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockMeshError {
    /// A rotation argument was outside of `-3..=3`.
    #[error("invalid rotation argument: {axis} = {value} (expected -3 to 3)")]
    InvalidRotationArgument {
        /// The axis the argument was given for.
        axis: char,
        /// The rejected value.
        value: i32,
    },

    /// An index referenced an element that does not exist.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// What the index points into.
        kind: IndexKind,
        /// The offending index.
        index: usize,
        /// Length of the indexed collection.
        len: usize,
    },

    /// `merge_block_meshes` was called without any meshes.
    #[error("cannot merge an empty sequence of block meshes")]
    EmptyMergeInput,

    /// A face name that is not one of the known cull keys.
    #[error("unknown face key: {0:?}")]
    UnknownFaceKey(String),

    /// A cube face texture rotation outside of `0..=3`.
    #[error("invalid texture rotation: {0} (expected 0 to 3)")]
    InvalidTextureRotation(u8),

    /// Cube lookup tables could not be parsed.
    #[error("invalid cube tables: {0}")]
    InvalidTables(String),
}

impl From<serde_json::Error> for BlockMeshError {
    fn from(err: serde_json::Error) -> Self {
        BlockMeshError::InvalidTables(err.to_string())
    }
}

/// Result type for block mesh operations.
pub type Result<T> = std::result::Result<T, BlockMeshError>;
