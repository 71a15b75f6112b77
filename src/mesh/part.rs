use serde::{Deserialize, Serialize};

use crate::error::{BlockMeshError, IndexKind, Result};

use super::geometry::{Triangle, Vertex};

/// A part of a block mesh for one of the culling directions.
///
/// Each `BlockMeshPart` is an independent drawable chunk of geometry. Triangle
/// vertex indices are local to this part's vertex list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockMeshPart {
    /// The vertices in this block mesh part.
    verts: Vec<Vertex>,
    /// The triangles in this block mesh part.
    triangles: Vec<Triangle>,
}

impl BlockMeshPart {
    /// Creates a part from caller supplied vertices and triangles.
    ///
    /// Indices are not checked in release builds, use [`BlockMeshPart::try_new`]
    /// for data from an untrusted source.
    pub fn new(verts: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        let part = BlockMeshPart { verts, triangles };
        debug_assert!(
            part.validate_vertices().is_ok(),
            "triangle vertex index out of range"
        );
        part
    }

    /// Creates a part, rejecting triangles that reference missing vertices.
    ///
    /// # Errors
    /// [`BlockMeshError::IndexOutOfRange`] for the first bad vertex index.
    pub fn try_new(verts: Vec<Vertex>, triangles: Vec<Triangle>) -> Result<Self> {
        let part = BlockMeshPart { verts, triangles };
        part.validate_vertices()?;
        Ok(part)
    }

    /// The vertices of this part.
    pub fn verts(&self) -> &[Vertex] {
        &self.verts
    }

    /// The triangles of this part, indexing into [`BlockMeshPart::verts`].
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Whether the part has neither vertices nor triangles.
    ///
    /// An empty part still occupies its slot in a [`crate::BlockMesh`].
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty() && self.triangles.is_empty()
    }

    /// Checks that every triangle corner is a valid index into `verts`.
    pub fn validate_vertices(&self) -> Result<()> {
        let len = self.verts.len();
        for triangle in &self.triangles {
            if let Some(&index) = triangle.vert_indices().iter().find(|&&i| i >= len) {
                return Err(BlockMeshError::IndexOutOfRange {
                    kind: IndexKind::Vertex,
                    index,
                    len,
                });
            }
        }
        Ok(())
    }

    /// Checks that every triangle's texture index is below `texture_count`.
    pub fn validate_textures(&self, texture_count: usize) -> Result<()> {
        match self
            .triangles
            .iter()
            .find(|triangle| triangle.texture_index() >= texture_count)
        {
            Some(triangle) => Err(BlockMeshError::IndexOutOfRange {
                kind: IndexKind::Texture,
                index: triangle.texture_index(),
                len: texture_count,
            }),
            None => Ok(()),
        }
    }

    /// Builds a part from raw buffers without the debug index check.
    /// Used by the merge and rotation engines, which only produce valid offsets.
    pub(crate) fn from_raw(verts: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        BlockMeshPart { verts, triangles }
    }
}
