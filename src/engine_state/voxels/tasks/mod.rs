//! # Voxel Task System
//!
//! Tasks related to voxel world generation, processed on the streamer's
//! worker pool.

pub mod chunk_generation_task;

pub use chunk_generation_task::{ChunkGenerationTask, ChunkGenerationTaskResult};
