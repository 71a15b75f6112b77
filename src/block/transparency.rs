//! # Transparency Module
//!
//! Block-level transparency classification used by neighbour culling.

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

/// The transparency of a block mesh.
///
/// Variants are ordered from most to least occluding. The ordering is what
/// [`BlockMeshTransparency::combine`] uses when block meshes are merged.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, Serialize, Deserialize,
)]
pub enum BlockMeshTransparency {
    /// A block that occupies the whole block and is opaque.
    FullOpaque = 0,

    /// A block that occupies the whole block and has at least one translucent face.
    FullTranslucent = 1,

    /// A block that does not occupy the whole block.
    Partial = 2,
}

impl BlockMeshTransparency {
    /// Combines the transparency of two meshes that are merged into one.
    ///
    /// The merged geometry covers the union of both inputs, so the result is the
    /// more occluding of the two: any `FullOpaque` input gives `FullOpaque`,
    /// otherwise any `FullTranslucent` input gives `FullTranslucent`, otherwise
    /// `Partial`. This is `min` under the variant ordering, which makes it
    /// commutative, associative and idempotent with `Partial` as identity.
    #[inline]
    pub fn combine(self, other: BlockMeshTransparency) -> BlockMeshTransparency {
        self.min(other)
    }

    /// Whether the block fills its whole voxel cell.
    pub fn is_full(self) -> bool {
        self != BlockMeshTransparency::Partial
    }

    /// Whether the block hides the faces of its neighbours that touch it.
    pub fn is_opaque(self) -> bool {
        self == BlockMeshTransparency::FullOpaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use BlockMeshTransparency::*;

    const ALL: [BlockMeshTransparency; 3] = [FullOpaque, FullTranslucent, Partial];

    #[test]
    fn combine_precedence() {
        assert_eq!(FullOpaque.combine(Partial), FullOpaque);
        assert_eq!(FullOpaque.combine(FullTranslucent), FullOpaque);
        assert_eq!(FullTranslucent.combine(Partial), FullTranslucent);
        assert_eq!(Partial.combine(Partial), Partial);
        assert_eq!(FullTranslucent.combine(FullTranslucent), FullTranslucent);
    }

    #[test]
    fn combine_is_commutative_and_associative() {
        for a in ALL {
            assert_eq!(a.combine(a), a);
            assert_eq!(a.combine(Partial), a);
            for b in ALL {
                assert_eq!(a.combine(b), b.combine(a));
                for c in ALL {
                    assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
                }
            }
        }
    }

    #[test]
    fn classification() {
        assert!(FullOpaque.is_full() && FullOpaque.is_opaque());
        assert!(FullTranslucent.is_full() && !FullTranslucent.is_opaque());
        assert!(!Partial.is_full() && !Partial.is_opaque());
        assert_eq!(
            <BlockMeshTransparency as num_traits::FromPrimitive>::from_u8(1),
            Some(BlockMeshTransparency::FullTranslucent)
        );
    }
}
