//! # Voxel World Core
//!
//! Representation and generation of the block world.
//!
//! ## Architecture
//!
//! * **Block**: block types, face directions and the texture-layer table
//! * **Chunk**: a fixed-size column of blocks plus its cached mesh and bounds
//! * **ChunkStore**: the sparse map that owns every loaded chunk
//! * **Generator**: the seeded height field that fills chunks
//! * **Tasks**: chunk generation work for the streamer's worker pool
//!
//! ## Data Flow
//!
//! 1. The streamer asks the store for a chunk (or schedules a generation task)
//! 2. The generator fills the chunk column by column from the height field
//! 3. The chunk builds its visible-face mesh
//! 4. The streamer hands the mesh to the renderer exactly once
//!
//! ## Thread Safety
//!
//! The generator is immutable after construction and shared through `Arc`.
//! Chunks are owned by the store; worker tasks build whole chunks and return
//! them by value, so no chunk is ever shared between threads.

pub mod block;
pub mod chunk;
pub mod chunk_store;
pub mod generator;
pub mod tasks;
