//! Geometry primitives for block meshes.
//!
//! This module defines the vertex and triangle formats shared by every block
//! mesh part. All types are plain `#[repr(C)]` values so vertex and triangle
//! lists can be handed to a GPU upload path with `bytemuck::cast_slice`.

use cgmath::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A 2D floating point vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct FloatVec2 {
    /// The x component.
    pub x: f32,
    /// The y component.
    pub y: f32,
}

impl FloatVec2 {
    /// Creates a new 2D vector.
    pub const fn new(x: f32, y: f32) -> Self {
        FloatVec2 { x, y }
    }
}

impl From<FloatVec2> for Vector2<f32> {
    fn from(v: FloatVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2<f32>> for FloatVec2 {
    fn from(v: Vector2<f32>) -> Self {
        FloatVec2::new(v.x, v.y)
    }
}

/// A 3D floating point vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct FloatVec3 {
    /// The x component (west to east).
    pub x: f32,
    /// The y component (down to up).
    pub y: f32,
    /// The z component (north to south).
    pub z: f32,
}

impl FloatVec3 {
    /// Creates a new 3D vector.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        FloatVec3 { x, y, z }
    }
}

impl From<FloatVec3> for Vector3<f32> {
    fn from(v: FloatVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for FloatVec3 {
    fn from(v: Vector3<f32>) -> Self {
        FloatVec3::new(v.x, v.y, v.z)
    }
}

/// Attributes for a single vertex.
///
/// # Memory Layout
/// - Coordinate: 3x f32 (12 bytes)
/// - Texture Coordinates: 2x f32 (8 bytes)
/// - Tint: 3x f32 (12 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    /// The spatial coordinate of the vertex, in block space (a full block spans 0 to 1).
    coord: FloatVec3,
    /// The texture coordinate of the vertex (0 to 1 across the texture).
    texture_coord: FloatVec2,
    /// The tint colour for the vertex, an RGB multiplier applied at render time.
    tint: FloatVec3,
}

impl Vertex {
    /// Creates a new vertex with the given attributes.
    ///
    /// # Arguments
    /// * `coord` - The position of the vertex in block space
    /// * `texture_coord` - The UV coordinate of the vertex
    /// * `tint` - The RGB tint multiplier
    ///
    /// # Returns
    /// A new `Vertex` instance
    pub const fn new(coord: FloatVec3, texture_coord: FloatVec2, tint: FloatVec3) -> Self {
        Vertex {
            coord,
            texture_coord,
            tint,
        }
    }

    /// The spatial coordinate of the vertex.
    pub fn coord(&self) -> FloatVec3 {
        self.coord
    }

    /// The texture coordinate of the vertex.
    pub fn texture_coord(&self) -> FloatVec2 {
        self.texture_coord
    }

    /// The tint colour for the vertex.
    pub fn tint(&self) -> FloatVec3 {
        self.tint
    }

    /// Returns a copy of this vertex with a new coordinate and texture coordinate.
    /// The tint is kept.
    pub(crate) fn with_coords(&self, coord: FloatVec3, texture_coord: FloatVec2) -> Self {
        Vertex {
            coord,
            texture_coord,
            tint: self.tint,
        }
    }
}

/// The vertex and texture indexes that make up a triangle.
///
/// Vertex indices point into the vertex list of the owning part, the texture
/// index points into the texture list of the owning mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct Triangle {
    vert_index_a: usize,
    vert_index_b: usize,
    vert_index_c: usize,
    texture_index: usize,
}

impl Triangle {
    /// Creates a new triangle.
    ///
    /// # Arguments
    /// * `vert_index_a`, `vert_index_b`, `vert_index_c` - The corners in
    ///   counter-clockwise order seen from the front
    /// * `texture_index` - Index into the texture list of the owning mesh
    ///
    /// # Returns
    /// A new `Triangle` instance
    pub const fn new(
        vert_index_a: usize,
        vert_index_b: usize,
        vert_index_c: usize,
        texture_index: usize,
    ) -> Self {
        Triangle {
            vert_index_a,
            vert_index_b,
            vert_index_c,
            texture_index,
        }
    }

    /// The first corner of the triangle.
    pub fn vert_index_a(&self) -> usize {
        self.vert_index_a
    }

    /// The second corner of the triangle.
    pub fn vert_index_b(&self) -> usize {
        self.vert_index_b
    }

    /// The third corner of the triangle.
    pub fn vert_index_c(&self) -> usize {
        self.vert_index_c
    }

    /// The index of the texture in the owning mesh's texture list.
    pub fn texture_index(&self) -> usize {
        self.texture_index
    }

    /// The three vertex indices in winding order.
    pub fn vert_indices(&self) -> [usize; 3] {
        [self.vert_index_a, self.vert_index_b, self.vert_index_c]
    }

    /// Returns this triangle with its vertex indices shifted by `vertex_offset`
    /// and its texture index shifted by `texture_offset`.
    pub(crate) fn offset(&self, vertex_offset: usize, texture_offset: usize) -> Self {
        Triangle {
            vert_index_a: self.vert_index_a + vertex_offset,
            vert_index_b: self.vert_index_b + vertex_offset,
            vert_index_c: self.vert_index_c + vertex_offset,
            texture_index: self.texture_index + texture_offset,
        }
    }
}
