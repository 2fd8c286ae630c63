//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size column of blocks
//! `size × height × size`, identified by its horizontal [`ChunkCoord`], plus the
//! mesh and bounding box derived from it.
//!
//! ## Storage
//!
//! Blocks live in one flat array of compact [`Block`] cells indexed
//! `y * size * size + z * size + x`. That formula and the out-of-bounds policy
//! exist only in [`Chunk::get_block`] / [`Chunk::set_block`]: any read outside
//! the chunk returns `Air`, so face-visibility checks at the chunk edge treat a
//! missing neighbor as open air.
//!
//! ## Lifecycle
//!
//! 1. Created empty by the chunk store on first access to its coordinate
//! 2. Populated once by the terrain generator
//! 3. Meshed with [`Chunk::create_mesh`] (again after any edit)
//! 4. Held by the store for the rest of the program

use crate::engine_state::rendering::culling::Aabb;
use crate::engine_state::rendering::meshing::Mesh;

use super::block::block_type::BlockType;
use super::block::Block;

mod chunk_coord;

pub use chunk_coord::{chunk_to_world, world_block_range, world_to_chunk, ChunkCoord, ColumnLocation};

/// Block extents shared by every chunk of a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChunkDimensions {
    /// Horizontal extent along x and z.
    pub size: u32,
    /// Vertical extent along y.
    pub height: u32,
}

impl ChunkDimensions {
    pub fn new(size: u32, height: u32) -> Self {
        ChunkDimensions { size, height }
    }

    /// Number of blocks in one chunk.
    pub fn volume(&self) -> usize {
        self.size as usize * self.size as usize * self.height as usize
    }
}

/// A `size × height × size` grid of blocks with its derived mesh and bounds.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    dimensions: ChunkDimensions,
    blocks: Vec<Block>,
    mesh: Mesh,
    aabb: Aabb,
    mesh_stale: bool,
}

impl Chunk {
    /// Creates a chunk filled with air. Its mesh is empty and stale.
    pub fn new(coord: ChunkCoord, dimensions: ChunkDimensions) -> Self {
        Chunk {
            coord,
            dimensions,
            blocks: vec![Block::AIR; dimensions.volume()],
            mesh: Mesh::new(),
            aabb: Aabb::chunk_footprint(coord, dimensions),
            mesh_stale: true,
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    /// Returns `true` if the chunk-local coordinate addresses a block of this chunk.
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        let size = self.dimensions.size as i32;
        (0..size).contains(&x)
            && (0..self.dimensions.height as i32).contains(&y)
            && (0..size).contains(&z)
    }

    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        let size = self.dimensions.size as usize;
        Some(y as usize * size * size + z as usize * size + x as usize)
    }

    /// Gets the block type at chunk-local coordinates.
    ///
    /// Coordinates outside `[0, size) × [0, height) × [0, size)` read as `Air`.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        match self.index(x, y, z) {
            Some(index) => self.blocks[index].block_type(),
            None => BlockType::Air,
        }
    }

    /// Sets the block at chunk-local coordinates and marks the mesh stale.
    ///
    /// Returns `false` (and changes nothing) if the coordinate is out of bounds.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) -> bool {
        match self.index(x, y, z) {
            Some(index) => {
                self.blocks[index] = Block::new(block_type);
                self.mesh_stale = true;
                true
            }
            None => false,
        }
    }

    /// Resets every block to air.
    pub fn clear(&mut self) {
        self.blocks.fill(Block::AIR);
        self.mesh_stale = true;
    }

    /// Raw block storage in index order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of non-air blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| block.block_type().is_solid())
            .count()
    }

    /// Height of the top surface of column (bx, bz): the y of the topmost solid
    /// block plus one. Empty and out-of-bounds columns have height 0.
    pub fn column_height(&self, bx: i32, bz: i32) -> u32 {
        if !self.in_bounds(bx, 0, bz) {
            return 0;
        }
        (0..self.dimensions.height as i32)
            .rev()
            .find(|&y| self.get_block(bx, y, bz).is_solid())
            .map_or(0, |y| y as u32 + 1)
    }

    /// Rebuilds the mesh from the current blocks and refreshes the bounding box.
    pub fn create_mesh(&mut self) {
        self.mesh = Mesh::visible_faces(self);
        self.aabb = Aabb::chunk_footprint(self.coord, self.dimensions);
        self.mesh_stale = false;
    }

    /// The mesh from the last call to [`Chunk::create_mesh`].
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// World-space bounds of everything this chunk can contain.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// `true` until `create_mesh` has run since the last block change.
    pub fn is_mesh_stale(&self) -> bool {
        self.mesh_stale
    }
}
