//! # Terrain Generator
//!
//! Column-based terrain: a multi-octave value-noise field sampled at each
//! column's world-space (x, z) gives a surface height, and each block below the
//! surface is assigned a layer by its depth.
//!
//! The noise is seeded once per world. Because sampling depends only on world
//! coordinates, a column on the shared edge of two chunks gets the same height
//! no matter which chunk asked for it.

use noise::{Fbm, MultiFractal, NoiseFn, Value};

use crate::config::WorldConfig;

use super::block::block_type::BlockType;
use super::chunk::{chunk_to_world, Chunk, ChunkCoord, ChunkDimensions};

/// Number of dirt-or-grass blocks at the top of a column, grass included.
pub const TOPSOIL_DEPTH: i32 = 8;

/// Picks the block at height `by` of a column whose surface is at `height`.
///
/// - `by == 0` → Bedrock
/// - `by == height - 1` → Grass
/// - `height - 8 < by < height - 1` → Dirt
/// - below that → Stone
/// - at or above `height` → Air
///
/// Bedrock wins over grass for a one-block column.
pub fn block_for_depth(by: i32, height: i32) -> BlockType {
    if by < 0 || by >= height {
        BlockType::Air
    } else if by == 0 {
        BlockType::Bedrock
    } else if by == height - 1 {
        BlockType::Grass
    } else if by > height - TOPSOIL_DEPTH {
        BlockType::Dirt
    } else {
        BlockType::Stone
    }
}

/// Deterministic terrain source for one world.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    noise: Fbm<Value>,
    dimensions: ChunkDimensions,
    base_height: i32,
    amplitude: f64,
    seed: u32,
}

impl TerrainGenerator {
    /// Builds the noise field from the configuration's seed and noise settings.
    ///
    /// The configuration is assumed to be validated.
    pub fn new(config: &WorldConfig) -> Self {
        let noise = Fbm::<Value>::new(config.seed)
            .set_octaves(config.octaves)
            .set_frequency(config.frequency)
            .set_persistence(config.persistence)
            .set_lacunarity(config.lacunarity);

        TerrainGenerator {
            noise,
            dimensions: config.dimensions(),
            base_height: config.base_height,
            amplitude: config.amplitude,
            seed: config.seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    /// Raw noise value at a world-space column.
    pub fn noise_at(&self, world_x: i64, world_z: i64) -> f64 {
        self.noise.get([world_x as f64, world_z as f64])
    }

    /// Surface height of the column at world-space (x, z).
    ///
    /// `base_height + floor(noise * amplitude)`, clamped to `[1, max_height]`
    /// so every column has a bedrock floor and fits in its chunk.
    pub fn height_at_world(&self, world_x: i64, world_z: i64) -> i32 {
        let offset = (self.noise_at(world_x, world_z) * self.amplitude).floor() as i32;
        (self.base_height + offset).clamp(1, self.dimensions.height as i32)
    }

    /// Surface height of local column (bx, bz) of chunk `coord`.
    pub fn column_height(&self, coord: ChunkCoord, bx: i32, bz: i32) -> i32 {
        let (world_x, world_z) = chunk_to_world(coord, bx, bz, self.dimensions.size);
        self.height_at_world(world_x, world_z)
    }

    /// Writes one column of the given height into `chunk`, leaving air above it.
    pub fn fill_column(chunk: &mut Chunk, bx: i32, bz: i32, height: i32) {
        for by in 0..height {
            chunk.set_block(bx, by, bz, block_for_depth(by, height));
        }
    }

    /// Fills every column of `chunk` from the noise field.
    pub fn populate(&self, chunk: &mut Chunk) {
        let coord = chunk.coord();
        let size = chunk.dimensions().size as i32;

        for bz in 0..size {
            for bx in 0..size {
                let height = self.column_height(coord, bx, bz);
                Self::fill_column(chunk, bx, bz, height);
            }
        }

        log::debug!(
            "Generated chunk {} ({} solid blocks)",
            coord,
            chunk.solid_count()
        );
    }

    /// Creates, populates and meshes the chunk at `coord`.
    pub fn generate_chunk(&self, coord: ChunkCoord) -> Chunk {
        let mut chunk = Chunk::new(coord, self.dimensions);
        self.populate(&mut chunk);
        chunk.create_mesh();
        chunk
    }
}
