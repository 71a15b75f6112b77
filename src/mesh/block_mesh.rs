//! The block mesh aggregate.
//!
//! A [`BlockMesh`] is all the data that makes up the model of one block: its
//! transparency class, the texture paths its triangles refer to, and one
//! optional [`BlockMeshPart`] per cull direction.

use serde::{Deserialize, Serialize};

use crate::{
    block::{BlockMeshCullDirection, BlockMeshTransparency, CULL_DIRECTION_COUNT},
    error::Result,
};

use super::{
    part::BlockMeshPart,
    rotate::{self, UvRotationTable},
};

/// The mesh parts of a block mesh, indexed by [`BlockMeshCullDirection`] value.
///
/// `None` means the block has no geometry for that direction. This is distinct
/// from a present part with no vertices.
pub type BlockMeshParts = [Option<BlockMeshPart>; CULL_DIRECTION_COUNT];

/// All the data that makes up a block mesh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockMesh {
    /// The transparency state of this block mesh.
    transparency: BlockMeshTransparency,
    /// The texture paths used in this block mesh.
    /// The triangle `texture_index` attribute is an index into this list.
    textures: Vec<String>,
    /// The mesh parts that make up this mesh.
    parts: BlockMeshParts,
}

impl BlockMesh {
    /// Creates a block mesh from caller supplied data.
    ///
    /// Caller data is accepted as-is. Debug builds assert that every triangle
    /// index is in range; use [`BlockMesh::try_new`] to get an error instead.
    pub fn new(
        transparency: BlockMeshTransparency,
        textures: Vec<String>,
        parts: BlockMeshParts,
    ) -> Self {
        let mesh = BlockMesh {
            transparency,
            textures,
            parts,
        };
        debug_assert!(mesh.validate().is_ok(), "block mesh index out of range");
        mesh
    }

    /// Creates a block mesh, validating every vertex and texture index.
    ///
    /// # Errors
    /// [`crate::BlockMeshError::IndexOutOfRange`] for the first bad index found.
    pub fn try_new(
        transparency: BlockMeshTransparency,
        textures: Vec<String>,
        parts: BlockMeshParts,
    ) -> Result<Self> {
        let mesh = BlockMesh {
            transparency,
            textures,
            parts,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// A mesh with no textures and no parts.
    pub fn empty(transparency: BlockMeshTransparency) -> Self {
        BlockMesh {
            transparency,
            textures: Vec::new(),
            parts: Default::default(),
        }
    }

    pub(crate) fn from_raw(
        transparency: BlockMeshTransparency,
        textures: Vec<String>,
        parts: BlockMeshParts,
    ) -> Self {
        BlockMesh {
            transparency,
            textures,
            parts,
        }
    }

    /// The transparency class of the whole mesh.
    pub fn transparency(&self) -> BlockMeshTransparency {
        self.transparency
    }

    /// The texture paths that triangle texture indices refer to.
    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    /// All seven slots, indexed by [`BlockMeshCullDirection::index`].
    pub fn parts(&self) -> &BlockMeshParts {
        &self.parts
    }

    /// The part for one cull direction, if the mesh has geometry there.
    pub fn part(&self, direction: BlockMeshCullDirection) -> Option<&BlockMeshPart> {
        self.parts[direction.index()].as_ref()
    }

    /// Iterates the populated slots in slot order.
    pub fn populated_parts(
        &self,
    ) -> impl Iterator<Item = (BlockMeshCullDirection, &BlockMeshPart)> + '_ {
        BlockMeshCullDirection::all()
            .into_iter()
            .filter_map(move |direction| self.part(direction).map(|part| (direction, part)))
    }

    /// Whether no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(Option::is_none)
    }

    /// Total vertex count over all parts.
    pub fn vertex_count(&self) -> usize {
        self.populated_parts().map(|(_, part)| part.verts().len()).sum()
    }

    /// Total triangle count over all parts.
    pub fn triangle_count(&self) -> usize {
        self.populated_parts()
            .map(|(_, part)| part.triangles().len())
            .sum()
    }

    /// Checks every vertex index against its part and every texture index
    /// against this mesh's texture list.
    pub fn validate(&self) -> Result<()> {
        for (_, part) in self.populated_parts() {
            part.validate_vertices()?;
            part.validate_textures(self.textures.len())?;
        }
        Ok(())
    }

    /// Rotate the mesh in the x and y axis.
    ///
    /// Accepted values are -3 to 3 which correspond to 90 degree rotations,
    /// applied about the x axis first and then the y axis. Texture coordinates
    /// are left unchanged, see [`BlockMesh::rotate_with_uv`].
    ///
    /// # Arguments
    /// * `rotx` - Quarter turns about the x axis, positive takes up to north
    /// * `roty` - Quarter turns about the y axis, positive takes north to east
    ///
    /// # Returns
    /// A new mesh with moved geometry and remapped cull slots
    ///
    /// # Precision
    /// Coordinates are turned about the block centre, so values on the 1/16
    /// pixel grid (and any other multiple of a power of two down to 2^-20)
    /// rotate exactly and four quarter turns restore them bit for bit.
    /// Coordinates off that grid pick up rounding of at most a few ulps per
    /// turn.
    ///
    /// # Errors
    /// [`crate::BlockMeshError::InvalidRotationArgument`] if either value is
    /// outside of -3 to 3.
    pub fn rotate(&self, rotx: i32, roty: i32) -> Result<BlockMesh> {
        rotate::rotate_block_mesh(self, rotx, roty, &UvRotationTable::default())
    }

    /// Rotate the mesh like [`BlockMesh::rotate`] and also spin texture
    /// coordinates by the per-face amounts in `uv_rotation`.
    pub fn rotate_with_uv(
        &self,
        rotx: i32,
        roty: i32,
        uv_rotation: &UvRotationTable,
    ) -> Result<BlockMesh> {
        rotate::rotate_block_mesh(self, rotx, roty, uv_rotation)
    }
}
