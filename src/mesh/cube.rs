//! Cube mesh construction from caller supplied lookup tables.
//!
//! The tables describing a unit cube (corner positions, which corners make up
//! each face, how a UV box maps onto the corners and how a quad splits into
//! triangles) are owned by the caller and passed in as [`CubeTables`]. This
//! module only assembles them into a [`BlockMesh`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    block::{BlockMeshCullDirection, BlockMeshTransparency, CULL_DIRECTION_COUNT},
    error::{BlockMeshError, IndexKind, Result},
};

use super::{
    block_mesh::{BlockMesh, BlockMeshParts},
    geometry::{FloatVec2, FloatVec3, Triangle, Vertex},
    part::BlockMeshPart,
};

/// Lookup tables describing a unit cube.
///
/// Face rows follow [`BlockMeshCullDirection::sides`] order: up, down, north,
/// east, south, west.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubeTables {
    /// The eight corners of the unit cube.
    pub corners: [FloatVec3; 8],
    /// Four corner indices per face, wound counter-clockwise seen from outside.
    pub faces: [[usize; 4]; 6],
    /// For each face corner, two indices into a `[u0, v0, u1, v1]` UV box.
    pub uv_lut: [usize; 8],
    /// Corner indices of the two triangles that make up a face.
    pub triangle_face: [usize; 6],
}

impl CubeTables {
    /// Parses tables from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: CubeTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Checks that every table entry indexes something that exists.
    pub fn validate(&self) -> Result<()> {
        let checks = self
            .faces
            .iter()
            .flatten()
            .map(|&i| (i, self.corners.len()))
            .chain(self.uv_lut.iter().map(|&i| (i, 4)))
            .chain(self.triangle_face.iter().map(|&i| (i, 4)));
        for (index, len) in checks {
            if index >= len {
                return Err(BlockMeshError::IndexOutOfRange {
                    kind: IndexKind::Table,
                    index,
                    len,
                });
            }
        }
        Ok(())
    }
}

/// One face of a cube to build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubeFace {
    /// Texture path for this face.
    pub texture: String,
    /// The `[u0, v0, u1, v1]` box of the texture shown on this face.
    pub uv: [f32; 4],
    /// Quarter turns of the texture on the face, 0 to 3.
    pub rotation: u8,
    /// Whether the face is hidden by an opaque neighbour on its side.
    /// Faces that are not culled go into the `CullNone` part.
    pub cull: bool,
}

impl CubeFace {
    /// A face showing the whole texture, unrotated and culled.
    pub fn full(texture: impl Into<String>) -> Self {
        CubeFace {
            texture: texture.into(),
            uv: [0.0, 0.0, 1.0, 1.0],
            rotation: 0,
            cull: true,
        }
    }
}

fn lerp(range: [f32; 2], t: f32) -> f32 {
    range[0] * (1.0 - t) + range[1] * t
}

/// Builds a cube shaped block mesh.
///
/// # Arguments
/// * `tables` - The unit cube lookup tables
/// * `faces` - The faces in up, down, north, east, south, west order
/// * `transparency` - The transparency of the resulting mesh
/// * `tint` - The tint given to every vertex
/// * `bounds` - The `[min, max]` extent of the cube on the x, y and z axis
///
/// # Errors
/// [`BlockMeshError::IndexOutOfRange`] for broken tables and
/// [`BlockMeshError::InvalidTextureRotation`] for a face rotation above 3.
pub fn build_cube(
    tables: &CubeTables,
    faces: &[CubeFace; 6],
    transparency: BlockMeshTransparency,
    tint: FloatVec3,
    bounds: [[f32; 2]; 3],
) -> Result<BlockMesh> {
    tables.validate()?;

    let mut textures: Vec<String> = Vec::new();
    let mut slot_verts: [Vec<Vertex>; CULL_DIRECTION_COUNT] = Default::default();
    let mut slot_triangles: [Vec<Triangle>; CULL_DIRECTION_COUNT] = Default::default();
    let mut used = [false; CULL_DIRECTION_COUNT];

    for (face_index, (side, face)) in BlockMeshCullDirection::sides()
        .into_iter()
        .zip(faces.iter())
        .enumerate()
    {
        if face.rotation > 3 {
            return Err(BlockMeshError::InvalidTextureRotation(face.rotation));
        }

        let texture_index = match textures.iter().position(|t| *t == face.texture) {
            Some(index) => index,
            None => {
                textures.push(face.texture.clone());
                textures.len() - 1
            }
        };

        let slot = if face.cull {
            side.index()
        } else {
            BlockMeshCullDirection::CullNone.index()
        };
        used[slot] = true;
        let vertex_offset = slot_verts[slot].len();

        for (k, &corner_index) in tables.faces[face_index].iter().enumerate() {
            let corner = tables.corners[corner_index];
            let lut_index = (2 * k + 8 - 2 * face.rotation as usize) % 8;
            let texture_coord = FloatVec2::new(
                face.uv[tables.uv_lut[lut_index]],
                face.uv[tables.uv_lut[lut_index + 1]],
            );
            let coord = FloatVec3::new(
                lerp(bounds[0], corner.x),
                lerp(bounds[1], corner.y),
                lerp(bounds[2], corner.z),
            );
            slot_verts[slot].push(Vertex::new(coord, texture_coord, tint));
        }

        slot_triangles[slot].extend(tables.triangle_face.chunks_exact(3).map(|tri| {
            Triangle::new(
                vertex_offset + tri[0],
                vertex_offset + tri[1],
                vertex_offset + tri[2],
                texture_index,
            )
        }));
    }

    let mut parts: BlockMeshParts = Default::default();
    for (i, part) in parts.iter_mut().enumerate() {
        if used[i] {
            *part = Some(BlockMeshPart::from_raw(
                std::mem::take(&mut slot_verts[i]),
                std::mem::take(&mut slot_triangles[i]),
            ));
        }
    }

    debug!(
        "Built cube mesh with {} textures, bounds {:?}",
        textures.len(),
        bounds
    );

    Ok(BlockMesh::from_raw(transparency, textures, parts))
}

/// Builds a full block cube with one texture per face and white tint.
///
/// Textures are given in up, down, north, east, south, west order. Every face
/// shows its whole texture and is culled by its neighbour.
pub fn build_unit_cube(
    tables: &CubeTables,
    textures: [&str; 6],
    transparency: BlockMeshTransparency,
) -> Result<BlockMesh> {
    let faces = textures.map(CubeFace::full);
    build_cube(
        tables,
        &faces,
        transparency,
        FloatVec3::new(1.0, 1.0, 1.0),
        [[0.0, 1.0]; 3],
    )
}
