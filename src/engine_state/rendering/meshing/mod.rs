//! Mesh generation and mesh ingestion.
//!
//! This module owns both halves of the path from block data to draw calls:
//! the visible-face mesher that turns a chunk into triangles, and the
//! ingestion interface through which finished meshes are handed to a
//! renderer.
//!
//! # Architecture
//! - `mesh/`: the `Mesh` buffers and the visible-face mesher
//! - [`MeshSink`]: what a renderer implements to receive chunk meshes
//! - [`MeshCache`]: an in-memory sink that keeps the uploaded bytes and
//!   bounds of every mesh and builds the per-frame draw list by frustum
//!   culling
//!
//! # Ingestion Rules
//! - An empty mesh is accepted as a no-op: `Ok(None)`, no handle issued
//! - A failed ingestion leaves the sink unchanged, so the caller can retry
//!   the same mesh later

use cgmath::Matrix4;

use crate::engine_state::rendering::culling::{cull, Aabb, Frustum};
use crate::error::IngestError;

mod mesh;

pub use mesh::*;

/// Identifier a sink assigns to an ingested mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u32);

/// Receiver of finished chunk meshes, typically a GPU renderer.
pub trait MeshSink {
    /// Takes a copy of `mesh` and its world-space bounds.
    ///
    /// # Returns
    /// - `Ok(Some(handle))` if the mesh was stored
    /// - `Ok(None)` if the mesh is empty and there is nothing to submit
    /// - `Err(_)` if the sink cannot hold the mesh; nothing was stored
    fn add_mesh(&mut self, mesh: &Mesh, aabb: &Aabb) -> Result<Option<MeshHandle>, IngestError>;
}

/// One mesh held by a [`MeshCache`], laid out as it would be uploaded.
#[derive(Debug, Clone)]
pub struct CachedMesh {
    pub handle: MeshHandle,
    pub vertex_bytes: Vec<u8>,
    pub index_bytes: Vec<u8>,
    pub vertex_count: usize,
    pub index_count: usize,
    pub aabb: Aabb,
}

/// In-memory renderer stand-in.
///
/// Copies vertex and index bytes of every ingested mesh into owned buffers,
/// hands out sequential handles and, given a camera, lists the meshes whose
/// bounds survive frustum culling.
///
/// An optional vertex budget caps the total number of stored vertices, which
/// is how exhausted GPU memory shows up to the streamer.
#[derive(Debug, Default)]
pub struct MeshCache {
    meshes: Vec<CachedMesh>,
    next_handle: u32,
    vertex_budget: Option<usize>,
    vertices_used: usize,
}

impl MeshCache {
    pub fn new() -> Self {
        MeshCache::default()
    }

    /// A cache that refuses meshes once `budget` vertices are stored.
    pub fn with_vertex_budget(budget: usize) -> Self {
        MeshCache {
            vertex_budget: Some(budget),
            ..MeshCache::default()
        }
    }

    /// Changes the vertex budget. `None` removes the limit. Meshes already
    /// stored are kept even if they exceed the new budget.
    pub fn set_vertex_budget(&mut self, budget: Option<usize>) {
        self.vertex_budget = budget;
    }

    /// Vertices still available under the budget, if there is one.
    pub fn vertices_available(&self) -> Option<usize> {
        self.vertex_budget
            .map(|budget| budget.saturating_sub(self.vertices_used))
    }

    pub fn vertices_used(&self) -> usize {
        self.vertices_used
    }

    /// Number of stored meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn meshes(&self) -> &[CachedMesh] {
        &self.meshes
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&CachedMesh> {
        self.meshes.iter().find(|cached| cached.handle == handle)
    }

    /// Handles of every stored mesh whose bounds are not culled by `frustum`.
    pub fn visible(&self, frustum: &Frustum) -> Vec<MeshHandle> {
        self.meshes
            .iter()
            .filter(|cached| !cull(frustum, &cached.aabb))
            .map(|cached| cached.handle)
            .collect()
    }

    /// Builds this frame's draw list from the camera's view and projection.
    pub fn draw_list(&self, view: &Matrix4<f32>, projection: &Matrix4<f32>) -> Vec<MeshHandle> {
        let frustum = Frustum::from_view_and_projection(view, projection);
        let visible = self.visible(&frustum);
        log::trace!(
            "Draw list: {} of {} meshes visible",
            visible.len(),
            self.meshes.len()
        );
        visible
    }
}

impl MeshSink for MeshCache {
    fn add_mesh(&mut self, mesh: &Mesh, aabb: &Aabb) -> Result<Option<MeshHandle>, IngestError> {
        if mesh.is_empty() {
            return Ok(None);
        }

        let vertex_count = mesh.vertices.len();
        if u32::try_from(vertex_count - 1).is_err() {
            return Err(IngestError::IndexOverflow(vertex_count));
        }
        if let Some(available) = self.vertices_available() {
            if vertex_count > available {
                return Err(IngestError::VertexBudgetExhausted {
                    requested: vertex_count,
                    available,
                });
            }
        }

        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;
        self.vertices_used += vertex_count;
        self.meshes.push(CachedMesh {
            handle,
            vertex_bytes: mesh.vertex_bytes().to_vec(),
            index_bytes: mesh.index_bytes().to_vec(),
            vertex_count,
            index_count: mesh.indices.len(),
            aabb: *aabb,
        });

        Ok(Some(handle))
    }
}
