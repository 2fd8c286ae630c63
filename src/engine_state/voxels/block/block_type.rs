//! # Block Type Module
//!
//! This module defines the closed set of block materials in the voxel world.
//! `Air` is the empty sentinel; every other variant is a solid unit cube.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminants are stable: they are the compact ids stored in
/// [`Block`](super::Block) and the row index into the texture-layer table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Default)]
#[repr(u8)]
pub enum BlockType {
    /// Empty space. Never meshed.
    #[default]
    Air = 0,
    /// Indestructible floor placed at y = 0 of every column.
    Bedrock,
    Brick,
    OreCoal,
    Cobble,
    MossyCobble,
    OreDiamond,
    Dirt,
    /// Top block of every generated column.
    Grass,
    OreIron,
    OreGold,
    OreLapis,
    Leaves,
    Log,
    Planks,
    Stone,
}

impl BlockType {
    /// Number of block types, including `Air`.
    pub const COUNT: usize = 16;

    /// Converts a compact `BlockTypeSize` back into a `BlockType`.
    ///
    /// Ids that do not name a block type decode as `Air`, so corrupted
    /// storage reads as empty space rather than panicking.
    pub fn from_id(id: BlockTypeSize) -> Self {
        BlockType::from_u8(id).unwrap_or(BlockType::Air)
    }

    /// The compact id stored for this block type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns `true` for every type except `Air`.
    pub fn is_solid(self) -> bool {
        self != BlockType::Air
    }

    /// Returns `true` if faces next to this block can be seen.
    pub fn is_transparent(self) -> bool {
        self == BlockType::Air
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_unknown_ids_are_air() {
        assert_eq!(BlockType::from_id(BlockType::Stone.id()), BlockType::Stone);
        assert_eq!(BlockType::from_id(BlockType::Grass.id()), BlockType::Grass);
        assert_eq!(BlockType::Stone.id() as usize, BlockType::COUNT - 1);
        assert_eq!(BlockType::from_id(200), BlockType::Air);
    }

    #[test]
    fn only_air_is_transparent() {
        assert!(BlockType::Air.is_transparent());
        assert!(!BlockType::Air.is_solid());
        assert!(BlockType::Leaves.is_solid());
    }
}
