//! # Chunk Store
//!
//! Sparse map from [`ChunkCoord`] to [`Chunk`]. The store exclusively owns every
//! chunk; callers borrow one for the length of a call.
//!
//! A coordinate is generated at most once. [`ChunkStore::get_or_generate`]
//! fills a missing chunk synchronously, and [`ChunkStore::insert`] accepts a
//! chunk generated elsewhere (a worker thread) only if the slot is still empty.

use std::collections::HashMap;
use std::sync::Arc;

use super::chunk::{Chunk, ChunkCoord, ChunkDimensions};
use super::generator::TerrainGenerator;

/// Owns every loaded chunk of one world.
pub struct ChunkStore {
    chunks: HashMap<ChunkCoord, Chunk>,
    generator: Arc<TerrainGenerator>,
}

impl ChunkStore {
    /// Creates an empty store backed by `generator`.
    pub fn new(generator: Arc<TerrainGenerator>) -> Self {
        ChunkStore {
            chunks: HashMap::new(),
            generator,
        }
    }

    /// The generator that fills new chunks. Shared with worker tasks.
    pub fn generator(&self) -> &Arc<TerrainGenerator> {
        &self.generator
    }

    pub fn dimensions(&self) -> ChunkDimensions {
        self.generator.dimensions()
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// Returns the chunk at `coord`, generating and meshing it first if absent.
    ///
    /// The flag is `true` when this call created the chunk.
    pub fn get_or_generate(&mut self, coord: ChunkCoord) -> (&mut Chunk, bool) {
        let mut created = false;
        let generator = &self.generator;
        let chunk = self.chunks.entry(coord).or_insert_with(|| {
            created = true;
            generator.generate_chunk(coord)
        });
        (chunk, created)
    }

    /// Stores a chunk produced outside the store.
    ///
    /// Returns the chunk back if its coordinate is already occupied; the
    /// existing chunk is kept.
    pub fn insert(&mut self, chunk: Chunk) -> Result<&mut Chunk, Chunk> {
        use std::collections::hash_map::Entry;

        match self.chunks.entry(chunk.coord()) {
            Entry::Occupied(_) => Err(chunk),
            Entry::Vacant(slot) => Ok(slot.insert(chunk)),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Coordinates of every loaded chunk, in no particular order.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::engine_state::voxels::block::block_type::BlockType;

    fn store() -> ChunkStore {
        let config = WorldConfig {
            chunk_size: 8,
            max_height: 96,
            ..Default::default()
        };
        ChunkStore::new(Arc::new(TerrainGenerator::new(&config)))
    }

    #[test]
    fn generates_once_per_coordinate() {
        let mut store = store();
        let coord = ChunkCoord::new(2, -1);

        let (chunk, created) = store.get_or_generate(coord);
        assert!(created);
        assert!(!chunk.is_mesh_stale());
        chunk.set_block(0, 90, 0, BlockType::Planks);

        let (chunk, created) = store.get_or_generate(coord);
        assert!(!created);
        assert_eq!(chunk.get_block(0, 90, 0), BlockType::Planks);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_keeps_the_first_chunk() {
        let mut store = store();
        let coord = ChunkCoord::new(0, 0);
        store.get_or_generate(coord);

        let duplicate = Chunk::new(coord, store.dimensions());
        let rejected = store.insert(duplicate).err().unwrap();
        assert_eq!(rejected.solid_count(), 0);
        assert!(store.get(coord).unwrap().solid_count() > 0);

        let fresh = Chunk::new(ChunkCoord::new(5, 5), store.dimensions());
        assert!(store.insert(fresh).is_ok());
        assert_eq!(store.len(), 2);
    }
}
