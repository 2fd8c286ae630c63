//! Rendering side of the voxel world.
//!
//! This module turns chunk data into geometry a GPU can draw and decides which
//! of it is worth drawing. It stops at the renderer boundary: meshes leave
//! through the [`meshing::MeshSink`] trait, and no graphics API is touched here.
//!
//! - `vertex`: the vertex record shared by the mesher and the renderer
//! - `meshing`: visible-face meshing and mesh ingestion
//! - `culling`: view-frustum extraction and AABB culling

pub mod culling;
pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use culling::{cull, Aabb, Frustum};
pub use meshing::{Mesh, MeshCache, MeshHandle, MeshSink};
pub use vertex::Vertex;
