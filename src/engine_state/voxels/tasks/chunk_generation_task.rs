//! # Chunk Generation Task
//!
//! Generates and meshes one chunk on a worker thread. The task only reads the
//! shared `TerrainGenerator`, so any number of them can run at once; the
//! finished chunk is handed back to the streamer, which alone writes to the
//! chunk store.

use std::sync::Arc;

use crate::engine_state::{
    task_management::Task,
    voxels::{
        chunk::{Chunk, ChunkCoord},
        generator::TerrainGenerator,
    },
};

/// A task that generates chunk data asynchronously.
pub struct ChunkGenerationTask {
    /// Shared, read-only terrain generator
    generator: Arc<TerrainGenerator>,
    /// The chunk to generate
    coord: ChunkCoord,
}

impl ChunkGenerationTask {
    /// Creates a new chunk generation task.
    ///
    /// # Arguments
    /// * `generator` - The generator every chunk of the world is built with
    /// * `coord` - The chunk to generate
    pub fn new(generator: Arc<TerrainGenerator>, coord: ChunkCoord) -> Self {
        ChunkGenerationTask { generator, coord }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }
}

impl Task for ChunkGenerationTask {
    type Output = ChunkGenerationTaskResult;

    /// Fills the chunk from the height field and builds its mesh.
    fn process(&self) -> ChunkGenerationTaskResult {
        ChunkGenerationTaskResult {
            chunk: self.generator.generate_chunk(self.coord),
        }
    }
}

/// The result of a chunk generation task: a populated, meshed chunk.
pub struct ChunkGenerationTaskResult {
    pub chunk: Chunk,
}
