//! Mesh data structures and the visible-face mesher.
//!
//! A chunk is turned into a triangle list holding one quad for every face of a
//! solid block whose neighbor in that direction is air. Buried faces produce
//! nothing, which keeps the vertex count proportional to the surface area of the
//! terrain rather than its volume.

use cgmath::Point3;

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::{
    block::block_side::BlockSide,
    chunk::{chunk_to_world, Chunk},
};

use super::face::{Face, QUAD_INDICES};

/// Vertices and triangle-list indices for one chunk.
///
/// Every index is smaller than `vertices.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Builds the mesh of every exposed face in `chunk`.
    ///
    /// A face at (bx, by, bz) in direction D is emitted iff the block is solid
    /// and its neighbor in D reads as air through the chunk's bounds-checked
    /// accessor. Neighbors outside the chunk are therefore always open.
    pub fn visible_faces(chunk: &Chunk) -> Self {
        let mut mesh = Mesh::new();
        let dimensions = chunk.dimensions();
        let size = dimensions.size as i32;
        let coord = chunk.coord();

        for by in 0..dimensions.height as i32 {
            for bz in 0..size {
                for bx in 0..size {
                    let block_type = chunk.get_block(bx, by, bz);
                    if !block_type.is_solid() {
                        continue;
                    }

                    let (world_x, world_z) = chunk_to_world(coord, bx, bz, dimensions.size);
                    let origin = Point3::new(world_x as f32, by as f32, world_z as f32);

                    for side in BlockSide::all() {
                        let offset = side.neighbor_offset();
                        let neighbor = chunk.get_block(bx + offset.x, by + offset.y, bz + offset.z);
                        if neighbor.is_transparent() {
                            mesh.add_face(&Face::new(origin, block_type, side));
                        }
                    }
                }
            }
        }

        log::debug!(
            "Meshed chunk {}: {} quads, {} vertices",
            coord,
            mesh.quad_count(),
            mesh.vertices.len()
        );

        mesh
    }

    /// Appends the four vertices and six indices of `face`.
    pub fn add_face(&mut self, face: &Face) {
        let base_index = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&face.vertices());
        self.indices.extend(QUAD_INDICES.iter().map(|i| base_index + i));
    }

    /// A mesh with no geometry has nothing to submit.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of quads (two triangles each).
    pub fn quad_count(&self) -> usize {
        self.indices.len() / QUAD_INDICES.len()
    }

    /// Vertex data as raw bytes, ready for a buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes, ready for a buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
