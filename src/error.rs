//! # Error Types
//!
//! Terrain generation and meshing are total functions and never fail. The
//! only fallible surfaces are loading a [`WorldConfig`](crate::config::WorldConfig)
//! and handing a finished mesh to the renderer's ingestion interface.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine_state::voxels::chunk::ChunkCoord;

/// Errors produced while loading or validating a world configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for a `WorldConfig`.
    #[error("failed to parse world config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Chunk size must be a power of two no larger than 256.
    #[error("chunk size {0} must be a power of two in 1..=256")]
    InvalidChunkSize(u32),

    /// The vertical extent of a chunk is zero or too tall.
    #[error("max height {0} must be in 1..=4096")]
    InvalidMaxHeight(u32),

    /// The terrain noise has no octaves or too many.
    #[error("octave count {0} must be in 1..=16")]
    InvalidOctaves(usize),

    /// The base terrain height falls outside the vertical extent of a chunk.
    #[error("base height {base_height} must be in 1..={max_height}")]
    InvalidBaseHeight { base_height: i32, max_height: u32 },
}

/// Errors returned by a [`MeshSink`](crate::engine_state::rendering::meshing::MeshSink)
/// when it cannot take ownership of a mesh.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The sink has run out of vertex storage.
    #[error("vertex budget exhausted: requested {requested}, available {available}")]
    VertexBudgetExhausted { requested: usize, available: usize },

    /// The mesh has more vertices than a `u32` index can address.
    #[error("mesh with {0} vertices cannot be addressed by u32 indices")]
    IndexOverflow(usize),
}

/// Errors surfaced by the world streamer.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A chunk was generated and meshed, but the renderer refused its mesh.
    /// The chunk stays in the store and is not marked as streamed.
    #[error("failed to ingest mesh for chunk {coord}: {source}")]
    Ingest {
        coord: ChunkCoord,
        #[source]
        source: IngestError,
    },
}
