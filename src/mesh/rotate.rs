//! Quarter-turn rotation of block meshes.
//!
//! Rotations follow the resource-pack blockstate convention: a positive turn
//! about the x axis takes the up face to the north, a positive turn about the y
//! axis takes the north face to the east. The x rotation is applied first, then
//! the y rotation, both about the block centre `(0.5, 0.5, 0.5)`.
//!
//! Every rotation is a signed permutation of the axes, so coordinates are moved
//! without trigonometry and the only roundoff is in the translation to and from
//! the block centre. Values on the 1/16 pixel grid rotate exactly.

use cgmath::{Matrix3, SquareMatrix, Vector2, Vector3};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    block::{BlockMeshCullDirection, CULL_DIRECTION_COUNT},
    error::{BlockMeshError, Result},
};

use super::{
    block_mesh::{BlockMesh, BlockMeshParts},
    geometry::{FloatVec2, FloatVec3, Vertex},
    part::BlockMeshPart,
};

/// Checks a rotation argument and reduces it to `0..4` quarter turns.
fn normalise_turns(axis: char, value: i32) -> Result<u8> {
    if !(-3..=3).contains(&value) {
        return Err(BlockMeshError::InvalidRotationArgument { axis, value });
    }
    Ok(value.rem_euclid(4) as u8)
}

/// One quarter turn about the x axis: `(x, y, z) -> (x, z, -y)` about the centre.
fn x_turn() -> Matrix3<f32> {
    Matrix3::from_cols(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(0.0, 1.0, 0.0),
    )
}

/// One quarter turn about the y axis: `(x, y, z) -> (-z, y, x)` about the centre.
fn y_turn() -> Matrix3<f32> {
    Matrix3::from_cols(
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
    )
}

/// The combined matrix for `rotx` x turns followed by `roty` y turns.
fn rotation_matrix(rotx: u8, roty: u8) -> Matrix3<f32> {
    let mut matrix = Matrix3::identity();
    for _ in 0..rotx {
        matrix = x_turn() * matrix;
    }
    for _ in 0..roty {
        matrix = y_turn() * matrix;
    }
    matrix
}

fn x_turn_direction(direction: BlockMeshCullDirection) -> BlockMeshCullDirection {
    use BlockMeshCullDirection::*;
    match direction {
        CullUp => CullNorth,
        CullNorth => CullDown,
        CullDown => CullSouth,
        CullSouth => CullUp,
        other => other,
    }
}

fn y_turn_direction(direction: BlockMeshCullDirection) -> BlockMeshCullDirection {
    use BlockMeshCullDirection::*;
    match direction {
        CullNorth => CullEast,
        CullEast => CullSouth,
        CullSouth => CullWest,
        CullWest => CullNorth,
        other => other,
    }
}

fn turn_direction(direction: BlockMeshCullDirection, rotx: u8, roty: u8) -> BlockMeshCullDirection {
    let mut direction = direction;
    for _ in 0..rotx {
        direction = x_turn_direction(direction);
    }
    for _ in 0..roty {
        direction = y_turn_direction(direction);
    }
    direction
}

/// The slot a part on `direction` lands in after `rotate(rotx, roty)`.
///
/// `CullNone` never moves.
///
/// # Errors
/// [`BlockMeshError::InvalidRotationArgument`] if either value is outside -3 to 3.
pub fn rotate_cull_direction(
    direction: BlockMeshCullDirection,
    rotx: i32,
    roty: i32,
) -> Result<BlockMeshCullDirection> {
    let rotx = normalise_turns('x', rotx)?;
    let roty = normalise_turns('y', roty)?;
    Ok(turn_direction(direction, rotx, roty))
}

/// Per-face texture coordinate rotation applied while rotating a mesh.
///
/// Maps (original cull direction, normalised rotation) to a number of quarter
/// turns applied to each texture coordinate about the UV centre `(0.5, 0.5)`.
/// One turn maps `(u, v)` to `(v, 1 - u)`. The table contents are supplied by
/// the caller; the default table is all zeros and leaves UVs untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvRotationTable {
    /// Indexed by `[direction][rotx mod 4][roty mod 4]`.
    turns: [[[u8; 4]; 4]; CULL_DIRECTION_COUNT],
}

impl UvRotationTable {
    /// A table that leaves every texture coordinate untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the UV quarter turns for parts on `direction` rotated by `(rotx, roty)`.
    ///
    /// # Errors
    /// [`BlockMeshError::InvalidRotationArgument`] for a bad rotation and
    /// [`BlockMeshError::InvalidTextureRotation`] if `turns` is above 3.
    pub fn set(
        &mut self,
        direction: BlockMeshCullDirection,
        rotx: i32,
        roty: i32,
        turns: u8,
    ) -> Result<()> {
        let rotx = normalise_turns('x', rotx)?;
        let roty = normalise_turns('y', roty)?;
        if turns > 3 {
            return Err(BlockMeshError::InvalidTextureRotation(turns));
        }
        self.turns[direction.index()][rotx as usize][roty as usize] = turns;
        Ok(())
    }

    /// Builder form of [`UvRotationTable::set`].
    pub fn with(
        mut self,
        direction: BlockMeshCullDirection,
        rotx: i32,
        roty: i32,
        turns: u8,
    ) -> Result<Self> {
        self.set(direction, rotx, roty, turns)?;
        Ok(self)
    }

    fn lookup(&self, direction: BlockMeshCullDirection, rotx: u8, roty: u8) -> u8 {
        self.turns[direction.index()][rotx as usize][roty as usize]
    }

    /// The UV quarter turns for parts on `direction` rotated by `(rotx, roty)`.
    pub fn turns(
        &self,
        direction: BlockMeshCullDirection,
        rotx: i32,
        roty: i32,
    ) -> Result<u8> {
        let rotx = normalise_turns('x', rotx)?;
        let roty = normalise_turns('y', roty)?;
        Ok(self.lookup(direction, rotx, roty))
    }
}

fn rotate_coord(matrix: Matrix3<f32>, coord: FloatVec3) -> FloatVec3 {
    let centre = Vector3::new(0.5, 0.5, 0.5);
    (matrix * (Vector3::from(coord) - centre) + centre).into()
}

fn rotate_uv(uv: FloatVec2, turns: u8) -> FloatVec2 {
    if turns == 0 {
        return uv;
    }
    let centre = Vector2::new(0.5, 0.5);
    let mut offset = Vector2::from(uv) - centre;
    for _ in 0..turns {
        offset = Vector2::new(offset.y, -offset.x);
    }
    (offset + centre).into()
}

/// Rotates a block mesh. See [`BlockMesh::rotate_with_uv`].
pub(crate) fn rotate_block_mesh(
    mesh: &BlockMesh,
    rotx: i32,
    roty: i32,
    uv_rotation: &UvRotationTable,
) -> Result<BlockMesh> {
    let turns_x = normalise_turns('x', rotx)?;
    let turns_y = normalise_turns('y', roty)?;
    if turns_x == 0 && turns_y == 0 {
        return Ok(mesh.clone());
    }

    let matrix = rotation_matrix(turns_x, turns_y);
    let mut parts: BlockMeshParts = Default::default();
    for (direction, part) in mesh.populated_parts() {
        let uv_turns = uv_rotation.lookup(direction, turns_x, turns_y);
        let verts: Vec<Vertex> = part
            .verts()
            .iter()
            .map(|vertex| {
                vertex.with_coords(
                    rotate_coord(matrix, vertex.coord()),
                    rotate_uv(vertex.texture_coord(), uv_turns),
                )
            })
            .collect();

        let new_direction = turn_direction(direction, turns_x, turns_y);
        trace!(
            "Rotated part {} -> {} ({} uv turns)",
            direction,
            new_direction,
            uv_turns
        );
        // A proper rotation keeps the winding, so triangles are reused as-is.
        parts[new_direction.index()] =
            Some(BlockMeshPart::from_raw(verts, part.triangles().to_vec()));
    }

    debug!(
        "Rotated block mesh by ({}, {}) quarter turns, {} vertices",
        rotx,
        roty,
        mesh.vertex_count()
    );

    Ok(BlockMesh::from_raw(
        mesh.transparency(),
        mesh.textures().to_vec(),
        parts,
    ))
}
