//! # World Streamer
//!
//! Keeps the chunks around a focus point loaded, meshed and registered with the
//! renderer.
//!
//! ## Responsibilities
//! - Lazily creating chunks for point queries (`get_chunk`, `get_height`)
//! - Streaming a square of chunks around a focus point (`generate_around`)
//! - Handing each chunk's mesh to the [`MeshSink`] exactly once
//!
//! ## Streaming Model
//!
//! The radius is measured in chunks with the Chebyshev metric, so a radius `r`
//! covers the `(2r + 1)²` chunks of a square centered on the focus chunk.
//! Chunks are visited row by row (z outer, x inner).
//!
//! A chunk is *streamed* once the sink has accepted its mesh, including the
//! `Ok(None)` answer for an empty mesh. If the sink refuses a mesh, the chunk
//! stays in the store without being marked, and the next call that covers it
//! retries the ingestion without regenerating anything.
//!
//! ## Worker Pool
//!
//! With workers, chunk generation and meshing run on a [`TaskManager`]. The
//! streamer stays the only writer of the store and the only caller of the
//! sink: finished chunks are inserted and ingested on the calling thread. A
//! coordinate is published at most once because the set of pending
//! coordinates is checked before publishing, and a point query for a pending
//! coordinate waits for the workers instead of generating it a second time.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use web_time::Instant;

use crate::config::WorldConfig;
use crate::error::{ConfigError, StreamError};

use super::rendering::meshing::{MeshHandle, MeshSink};
use super::task_management::TaskManager;
use super::voxels::{
    chunk::{world_to_chunk, Chunk, ChunkCoord},
    chunk_store::ChunkStore,
    generator::TerrainGenerator,
    tasks::{ChunkGenerationTask, ChunkGenerationTaskResult},
};

/// Work done by one streaming call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamReport {
    /// Chunks created and filled from the height field.
    pub generated: usize,
    /// Meshes built, including those of newly generated chunks.
    pub meshed: usize,
    /// Meshes accepted by the sink with a handle.
    pub ingested: usize,
    /// Chunks streamed with an empty mesh (nothing to submit).
    pub empty: usize,
}

impl StreamReport {
    /// `true` when the call did no work at all.
    pub fn is_idle(&self) -> bool {
        *self == StreamReport::default()
    }

    fn absorb(&mut self, other: StreamReport) {
        self.generated += other.generated;
        self.meshed += other.meshed;
        self.ingested += other.ingested;
        self.empty += other.empty;
    }
}

/// Streams chunks of one world into a [`MeshSink`].
pub struct WorldStreamer<S: MeshSink> {
    store: ChunkStore,
    sink: S,
    /// Chunks whose mesh the sink has accepted, with the handle it returned.
    streamed: HashMap<ChunkCoord, Option<MeshHandle>>,
    /// Coordinates published to workers whose chunk has not been collected.
    pending: HashSet<ChunkCoord>,
    task_manager: Option<TaskManager<ChunkGenerationTask>>,
}

impl<S: MeshSink> WorldStreamer<S> {
    /// Creates a streamer for the world described by `config`.
    ///
    /// Uses `config.workers` worker threads; zero streams synchronously on the
    /// calling thread.
    ///
    /// # Arguments
    /// * `config` - World settings; validated here
    /// * `sink` - Receiver of every chunk mesh
    pub fn new(config: &WorldConfig, sink: S) -> Result<Self, ConfigError> {
        Self::with_workers(config, sink, config.workers)
    }

    /// Creates a streamer with an explicit number of worker threads.
    pub fn with_workers(config: &WorldConfig, sink: S, workers: usize) -> Result<Self, ConfigError> {
        config.validate()?;

        let generator = Arc::new(TerrainGenerator::new(config));
        let task_manager = (workers > 0).then(|| TaskManager::new(workers));

        log::info!(
            "World streamer ready: seed {}, chunks {}x{}x{}, {} workers",
            config.seed,
            config.chunk_size,
            config.max_height,
            config.chunk_size,
            workers
        );

        Ok(WorldStreamer {
            store: ChunkStore::new(generator),
            sink,
            streamed: HashMap::new(),
            pending: HashSet::new(),
            task_manager,
        })
    }

    /// Returns the chunk at chunk coordinates (cx, cz), generating and meshing
    /// it first if it does not exist yet.
    ///
    /// The chunk is not ingested here; that happens the first time
    /// `generate_around` covers it.
    pub fn get_chunk(&mut self, cx: i32, cz: i32) -> &Chunk {
        let coord = ChunkCoord::new(cx, cz);
        if self.pending.contains(&coord) {
            self.collect(true);
        }
        let (chunk, created) = self.store.get_or_generate(coord);
        if created {
            log::debug!("Generated chunk {} on demand", coord);
        }
        chunk
    }

    /// Terrain height at world-space (x, z): one above the topmost solid block
    /// of the column, or `0.0` for an empty column.
    pub fn get_height(&mut self, world_x: f64, world_z: f64) -> f32 {
        let size = self.store.dimensions().size;
        let location = world_to_chunk(world_x, world_z, size);
        self.get_chunk(location.chunk.x, location.chunk.z)
            .column_height(location.bx, location.bz) as f32
    }

    /// Makes sure every chunk within `radius` of the chunk containing
    /// (world_x, world_z) exists, is meshed and has been handed to the sink.
    ///
    /// Chunks that are already streamed are left alone, so repeating a call
    /// does no work.
    ///
    /// # Errors
    /// Returns [`StreamError::Ingest`] for the first chunk whose mesh the sink
    /// refuses. Chunks visited before it stay streamed; it and the chunks after
    /// it are picked up by the next call.
    pub fn generate_around(
        &mut self,
        world_x: f64,
        world_z: f64,
        radius: u32,
    ) -> Result<StreamReport, StreamError> {
        let start = Instant::now();
        let center = world_to_chunk(world_x, world_z, self.store.dimensions().size).chunk;
        let mut report = StreamReport::default();

        if self.task_manager.is_some() {
            self.request_around(world_x, world_z, radius);
            report.absorb(self.finish_pending()?);
        }

        for coord in center.square_around(radius) {
            if self.streamed.contains_key(&coord) {
                continue;
            }
            let (_, created) = self.store.get_or_generate(coord);
            if created {
                report.generated += 1;
                report.meshed += 1;
            }
            self.ingest(coord, &mut report)?;
        }

        if !report.is_idle() {
            log::info!(
                "Streamed around chunk {} (radius {}): {} generated, {} meshed, {} ingested, {} empty in {:?}",
                center,
                radius,
                report.generated,
                report.meshed,
                report.ingested,
                report.empty,
                start.elapsed()
            );
        }

        Ok(report)
    }

    /// Publishes a generation task for every chunk within `radius` that is
    /// neither loaded nor already pending. Without workers this does nothing.
    ///
    /// # Returns
    /// The number of tasks published.
    pub fn request_around(&mut self, world_x: f64, world_z: f64, radius: u32) -> usize {
        let Some(task_manager) = self.task_manager.as_mut() else {
            return 0;
        };

        let center = world_to_chunk(world_x, world_z, self.store.dimensions().size).chunk;
        let mut published = 0;
        for coord in center.square_around(radius) {
            if self.store.contains(coord) || self.pending.contains(&coord) {
                continue;
            }
            self.pending.insert(coord);
            task_manager.publish_task(ChunkGenerationTask::new(
                self.store.generator().clone(),
                coord,
            ));
            published += 1;
        }

        if published > 0 {
            log::debug!("Requested {} chunks around {}", published, center);
        }
        published
    }

    /// Inserts and ingests the chunks workers have finished so far, without
    /// blocking.
    pub fn process_completed(&mut self) -> Result<StreamReport, StreamError> {
        let (inserted, mut report) = self.collect(false);
        for coord in inserted {
            self.ingest(coord, &mut report)?;
        }
        Ok(report)
    }

    /// Waits for every pending chunk, then inserts and ingests them.
    pub fn finish_pending(&mut self) -> Result<StreamReport, StreamError> {
        let (inserted, mut report) = self.collect(true);
        for coord in inserted {
            self.ingest(coord, &mut report)?;
        }
        Ok(report)
    }

    /// Moves finished worker chunks into the store.
    ///
    /// Returns the inserted coordinates and a report counting their generation
    /// and meshing.
    fn collect(&mut self, blocking: bool) -> (Vec<ChunkCoord>, StreamReport) {
        let mut report = StreamReport::default();
        let Some(task_manager) = self.task_manager.as_mut() else {
            return (Vec::new(), report);
        };

        let results = if blocking {
            task_manager.wait_for_all()
        } else {
            task_manager.drain_completed()
        };
        if blocking {
            // Anything still marked pending was lost with its worker.
            self.pending.clear();
        }

        let mut inserted = Vec::with_capacity(results.len());
        for ChunkGenerationTaskResult { chunk } in results {
            let coord = chunk.coord();
            self.pending.remove(&coord);
            match self.store.insert(chunk) {
                Ok(_) => {
                    report.generated += 1;
                    report.meshed += 1;
                    inserted.push(coord);
                }
                Err(_) => log::warn!("Discarding duplicate generation of chunk {}", coord),
            }
        }
        (inserted, report)
    }

    /// Hands the mesh of a loaded chunk to the sink if it has not been yet.
    fn ingest(&mut self, coord: ChunkCoord, report: &mut StreamReport) -> Result<(), StreamError> {
        if self.streamed.contains_key(&coord) {
            return Ok(());
        }
        let Some(chunk) = self.store.get_mut(coord) else {
            return Ok(());
        };

        if chunk.is_mesh_stale() {
            chunk.create_mesh();
            report.meshed += 1;
        }

        match self.sink.add_mesh(chunk.mesh(), chunk.aabb()) {
            Ok(handle) => {
                match handle {
                    Some(_) => report.ingested += 1,
                    None => report.empty += 1,
                }
                self.streamed.insert(coord, handle);
                Ok(())
            }
            Err(source) => {
                log::warn!("Mesh ingestion failed for chunk {}: {}", coord, source);
                Err(StreamError::Ingest { coord, source })
            }
        }
    }

    /// Whether the sink has accepted the mesh of chunk `coord`.
    pub fn is_streamed(&self, coord: ChunkCoord) -> bool {
        self.streamed.contains_key(&coord)
    }

    /// Handle the sink returned for chunk `coord`; `None` if the chunk is not
    /// streamed or its mesh was empty.
    pub fn mesh_handle(&self, coord: ChunkCoord) -> Option<MeshHandle> {
        self.streamed.get(&coord).copied().flatten()
    }

    pub fn streamed_count(&self) -> usize {
        self.streamed.len()
    }

    /// Coordinates published to workers and not yet collected.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    /// Mutable access to the chunks. Edited chunks are re-meshed before their
    /// first ingestion; meshes already handed to the sink are not replaced.
    pub fn store_mut(&mut self) -> &mut ChunkStore {
        &mut self.store
    }
}
