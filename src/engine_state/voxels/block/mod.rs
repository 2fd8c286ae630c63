//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions, block face handling, the compact storage
//! cell kept in chunks, and the texture-array layer assigned to every face.

use block_side::BlockSide;
use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Maps each block type to its texture-array layer for each face.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array is indexed by `BlockSide`:
/// [Top, Bottom, North, South, East, West]
#[rustfmt::skip]
pub static BLOCK_TYPE_TO_TEXTURE_LAYERS: [[u32; 6]; BlockType::COUNT] = [
    [0, 0, 0, 0, 0, 0],       // Air (never meshed)
    [0, 0, 0, 0, 0, 0],       // Bedrock
    [1, 1, 1, 1, 1, 1],       // Brick
    [2, 2, 2, 2, 2, 2],       // OreCoal
    [3, 3, 3, 3, 3, 3],       // Cobble
    [4, 4, 4, 4, 4, 4],       // MossyCobble
    [15, 15, 15, 15, 15, 15], // OreDiamond
    [16, 16, 16, 16, 16, 16], // Dirt
    [21, 18, 18, 18, 18, 18], // Grass (top: 21, rest: 18)
    [22, 22, 22, 22, 22, 22], // OreIron
    [17, 17, 17, 17, 17, 17], // OreGold
    [23, 23, 23, 23, 23, 23], // OreLapis
    [24, 24, 24, 24, 24, 24], // Leaves
    [26, 26, 25, 25, 25, 25], // Log (rings: 26, bark: 25)
    [28, 28, 28, 28, 28, 28], // Planks
    [29, 29, 29, 29, 29, 29], // Stone
];

/// Represents a single voxel block stored in a chunk.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute and the `Pod` derive let a chunk's block array be
/// viewed as plain bytes. The block type is stored as a compact `BlockTypeSize`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// An empty cell. Equal to the all-zero bit pattern.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type.id(),
        }
    }

    /// Decodes the stored id.
    pub fn block_type(self) -> BlockType {
        BlockType::from_id(self.block_type)
    }

    /// Gets the texture-array layer for one face of a block type.
    pub fn texture_layer(block_type: BlockType, side: BlockSide) -> u32 {
        BLOCK_TYPE_TO_TEXTURE_LAYERS[block_type as usize][side as usize]
    }
}
