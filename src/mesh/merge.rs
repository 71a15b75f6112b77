//! Merging of block meshes.
//!
//! Used to combine the meshes of a block stack (a base block plus extra blocks
//! such as a waterlogged layer) into one mesh that can be drawn in one batch.

use log::{debug, trace};
use web_time::Instant;

use crate::{
    block::{BlockMeshCullDirection, BlockMeshTransparency, CULL_DIRECTION_COUNT},
    error::{BlockMeshError, Result},
};

use super::{
    block_mesh::{BlockMesh, BlockMeshParts},
    geometry::{Triangle, Vertex},
    part::BlockMeshPart,
};

/// Merge multiple block mesh objects into one block mesh.
///
/// - Texture lists are concatenated in input order without de-duplication, and
///   each mesh's texture indices are shifted by the number of textures of the
///   meshes before it.
/// - Each cull slot is merged independently. A slot stays absent if no input
///   has it, otherwise the present parts are concatenated in input order with
///   vertex indices shifted by the vertices already in that slot.
/// - The transparency is the combination of all inputs, see
///   [`BlockMeshTransparency::combine`].
///
/// Runs in a single pass over the inputs.
///
/// # Errors
/// [`BlockMeshError::EmptyMergeInput`] if `meshes` yields nothing.
pub fn merge_block_meshes<'a, I>(meshes: I) -> Result<BlockMesh>
where
    I: IntoIterator<Item = &'a BlockMesh>,
{
    let start = Instant::now();
    let meshes: Vec<&BlockMesh> = meshes.into_iter().collect();
    if meshes.is_empty() {
        return Err(BlockMeshError::EmptyMergeInput);
    }

    let mut transparency = BlockMeshTransparency::Partial;
    let mut texture_count = 0;
    let mut slot_sizes = [(0usize, 0usize, false); CULL_DIRECTION_COUNT];
    for mesh in &meshes {
        transparency = transparency.combine(mesh.transparency());
        texture_count += mesh.textures().len();
        for (direction, part) in mesh.populated_parts() {
            let size = &mut slot_sizes[direction.index()];
            size.0 += part.verts().len();
            size.1 += part.triangles().len();
            size.2 = true;
        }
    }

    let mut textures = Vec::with_capacity(texture_count);
    let mut slot_verts: [Vec<Vertex>; CULL_DIRECTION_COUNT] = Default::default();
    let mut slot_triangles: [Vec<Triangle>; CULL_DIRECTION_COUNT] = Default::default();
    for (i, &(num_verts, num_triangles, _)) in slot_sizes.iter().enumerate() {
        slot_verts[i].reserve_exact(num_verts);
        slot_triangles[i].reserve_exact(num_triangles);
    }

    for mesh in &meshes {
        let texture_offset = textures.len();
        textures.extend(mesh.textures().iter().cloned());

        for (direction, part) in mesh.populated_parts() {
            let i = direction.index();
            let vertex_offset = slot_verts[i].len();
            slot_verts[i].extend_from_slice(part.verts());
            slot_triangles[i].extend(
                part.triangles()
                    .iter()
                    .map(|triangle| triangle.offset(vertex_offset, texture_offset)),
            );
        }
    }

    let mut parts: BlockMeshParts = Default::default();
    for direction in BlockMeshCullDirection::all() {
        let i = direction.index();
        if !slot_sizes[i].2 {
            continue;
        }
        let verts = std::mem::take(&mut slot_verts[i]);
        let triangles = std::mem::take(&mut slot_triangles[i]);
        trace!(
            "Merged slot {}: {} vertices, {} triangles",
            direction,
            verts.len(),
            triangles.len()
        );
        parts[i] = Some(BlockMeshPart::from_raw(verts, triangles));
    }

    debug!(
        "Merged {} block meshes ({} textures, {:?}) in {:?}",
        meshes.len(),
        textures.len(),
        transparency,
        start.elapsed()
    );

    Ok(BlockMesh::from_raw(transparency, textures, parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::geometry::{FloatVec2, FloatVec3};

    fn vertex(x: f32, y: f32) -> Vertex {
        Vertex::new(
            FloatVec3::new(x, y, 0.0),
            FloatVec2::new(x, y),
            FloatVec3::new(1.0, 1.0, 1.0),
        )
    }

    fn quad_part(texture_index: usize) -> BlockMeshPart {
        BlockMeshPart::new(
            vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 1.0), vertex(0.0, 1.0)],
            vec![
                Triangle::new(0, 1, 2, texture_index),
                Triangle::new(0, 2, 3, texture_index),
            ],
        )
    }

    fn tri_part(texture_index: usize) -> BlockMeshPart {
        BlockMeshPart::new(
            vec![vertex(0.0, 0.0), vertex(0.5, 0.0), vertex(0.5, 0.5)],
            vec![Triangle::new(0, 1, 2, texture_index)],
        )
    }

    fn mesh_with(
        transparency: BlockMeshTransparency,
        textures: &[&str],
        slots: Vec<(BlockMeshCullDirection, BlockMeshPart)>,
    ) -> BlockMesh {
        let mut parts: BlockMeshParts = Default::default();
        for (direction, part) in slots {
            parts[direction.index()] = Some(part);
        }
        BlockMesh::new(
            transparency,
            textures.iter().map(|t| t.to_string()).collect(),
            parts,
        )
    }

    #[test]
    fn texture_indices_are_offset() {
        let a = mesh_with(
            BlockMeshTransparency::Partial,
            &["a.png"],
            vec![(BlockMeshCullDirection::CullNone, tri_part(0))],
        );
        let b = mesh_with(
            BlockMeshTransparency::Partial,
            &["b.png"],
            vec![(BlockMeshCullDirection::CullNone, tri_part(0))],
        );

        let merged = merge_block_meshes([&a, &b]).unwrap();
        assert_eq!(merged.textures(), &["a.png".to_string(), "b.png".to_string()]);
        let part = merged.part(BlockMeshCullDirection::CullNone).unwrap();
        assert_eq!(part.triangles()[0].texture_index(), 0);
        assert_eq!(part.triangles()[1].texture_index(), 1);
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn vertex_indices_are_offset_per_slot() {
        let a = mesh_with(
            BlockMeshTransparency::Partial,
            &["a.png"],
            vec![(BlockMeshCullDirection::CullNone, quad_part(0))],
        );
        let b = mesh_with(
            BlockMeshTransparency::Partial,
            &["b.png"],
            vec![(BlockMeshCullDirection::CullNone, tri_part(0))],
        );

        let merged = merge_block_meshes(&[a, b]).unwrap();
        let part = merged.part(BlockMeshCullDirection::CullNone).unwrap();
        assert_eq!(part.verts().len(), 7);
        assert_eq!(part.triangles().len(), 3);
        assert_eq!(part.triangles()[2].vert_indices(), [4, 5, 6]);
        assert_eq!(part.triangles()[2].texture_index(), 1);
    }

    #[test]
    fn slots_merge_independently() {
        let a = mesh_with(
            BlockMeshTransparency::FullOpaque,
            &["a.png"],
            vec![
                (BlockMeshCullDirection::CullUp, quad_part(0)),
                (BlockMeshCullDirection::CullNorth, quad_part(0)),
            ],
        );
        let b = mesh_with(
            BlockMeshTransparency::Partial,
            &["b.png", "c.png"],
            vec![(BlockMeshCullDirection::CullNorth, tri_part(1))],
        );

        let merged = merge_block_meshes([&a, &b]).unwrap();
        let populated: Vec<_> = merged.populated_parts().map(|(d, _)| d).collect();
        assert_eq!(
            populated,
            vec![BlockMeshCullDirection::CullUp, BlockMeshCullDirection::CullNorth]
        );
        // The up slot only has a's geometry, untouched.
        assert_eq!(merged.part(BlockMeshCullDirection::CullUp), a.part(BlockMeshCullDirection::CullUp));
        let north = merged.part(BlockMeshCullDirection::CullNorth).unwrap();
        assert_eq!(north.triangles()[2], Triangle::new(4, 5, 6, 2));
        assert_eq!(merged.transparency(), BlockMeshTransparency::FullOpaque);
    }

    #[test]
    fn empty_but_present_part_keeps_its_slot() {
        let a = mesh_with(
            BlockMeshTransparency::Partial,
            &[],
            vec![(BlockMeshCullDirection::CullWest, BlockMeshPart::new(Vec::new(), Vec::new()))],
        );
        let merged = merge_block_meshes([&a]).unwrap();
        assert!(merged.part(BlockMeshCullDirection::CullWest).unwrap().is_empty());
        assert_eq!(merged.populated_parts().count(), 1);
    }

    #[test]
    fn single_mesh_merge_is_identity() {
        let a = mesh_with(
            BlockMeshTransparency::FullTranslucent,
            &["a.png", "a.png"],
            vec![
                (BlockMeshCullDirection::CullDown, quad_part(1)),
                (BlockMeshCullDirection::CullNone, tri_part(0)),
            ],
        );
        assert_eq!(merge_block_meshes([&a]).unwrap(), a);
    }

    #[test]
    fn empty_input_fails() {
        let none: Vec<BlockMesh> = Vec::new();
        assert_eq!(
            merge_block_meshes(&none),
            Err(BlockMeshError::EmptyMergeInput)
        );
    }

    #[test]
    fn transparency_uses_combination_rule() {
        let translucent = BlockMesh::empty(BlockMeshTransparency::FullTranslucent);
        let partial = BlockMesh::empty(BlockMeshTransparency::Partial);
        let opaque = BlockMesh::empty(BlockMeshTransparency::FullOpaque);

        let merged = merge_block_meshes([&partial, &translucent]).unwrap();
        assert_eq!(merged.transparency(), BlockMeshTransparency::FullTranslucent);
        let merged = merge_block_meshes([&partial, &partial]).unwrap();
        assert_eq!(merged.transparency(), BlockMeshTransparency::Partial);
        let merged = merge_block_meshes([&translucent, &opaque, &partial]).unwrap();
        assert_eq!(merged.transparency(), BlockMeshTransparency::FullOpaque);
        assert!(merged.is_empty());
    }

    #[test]
    fn regrouping_preserves_order() {
        let a = mesh_with(
            BlockMeshTransparency::Partial,
            &["a.png"],
            vec![(BlockMeshCullDirection::CullNone, quad_part(0))],
        );
        let b = mesh_with(
            BlockMeshTransparency::FullTranslucent,
            &["b.png"],
            vec![
                (BlockMeshCullDirection::CullNone, tri_part(0)),
                (BlockMeshCullDirection::CullSouth, quad_part(0)),
            ],
        );
        let c = mesh_with(
            BlockMeshTransparency::Partial,
            &["c.png", "b.png"],
            vec![
                (BlockMeshCullDirection::CullSouth, tri_part(1)),
                (BlockMeshCullDirection::CullNone, quad_part(0)),
            ],
        );

        let flat = merge_block_meshes([&a, &b, &c]).unwrap();
        let bc = merge_block_meshes([&b, &c]).unwrap();
        let ab = merge_block_meshes([&a, &b]).unwrap();
        assert_eq!(merge_block_meshes([&a, &bc]).unwrap(), flat);
        assert_eq!(merge_block_meshes([&ab, &c]).unwrap(), flat);
        assert!(flat.validate().is_ok());
    }
}
