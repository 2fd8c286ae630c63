//! # Engine State Module
//!
//! Everything between a world seed and a list of meshes to draw.
//!
//! ## Key Components
//!
//! * `voxels` - Blocks, chunks, the chunk store and the terrain generator
//! * `rendering` - Vertex format, visible-face meshing, mesh ingestion and frustum culling
//! * `task_management` - Worker pool for chunk generation
//! * `streamer` - Keeps the chunks around a focus point generated and ingested
//!
//! ## Architecture
//!
//! `WorldStreamer` is the coordinator. It owns the `ChunkStore` and the
//! renderer's `MeshSink`, optionally drives a `TaskManager`, and is the only
//! place where chunks and meshes cross between subsystems.

pub mod rendering;
pub mod streamer;
pub mod task_management;
pub mod voxels;
