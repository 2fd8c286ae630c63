//! Vertex data structures for voxel rendering.
//!
//! This module defines the vertex format produced by the chunk mesher and
//! consumed by the renderer's vertex buffers.

use cgmath::{Point3, Vector3};

/// A vertex in the voxel rendering pipeline.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 3] (12 bytes), `u`, `v` and the texture-array layer
///
/// Total size: 36 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position
    pub position: [f32; 3],
    /// Outward normal of the face this vertex belongs to
    pub normal: [f32; 3],
    /// `[u, v, layer]`: the third component selects the texture-array layer
    pub tex_coord: [f32; 3],
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - World-space position
    /// * `normal` - Outward face normal
    /// * `uv` - Texture coordinates within the layer
    /// * `texture_layer` - Index of the layer in the texture array
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, uv: [f32; 2], texture_layer: u32) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
            tex_coord: [uv[0], uv[1], texture_layer as f32],
        }
    }

    pub fn position(&self) -> Point3<f32> {
        Point3::from(self.position)
    }

    /// Texture-array layer encoded in the third texture coordinate.
    pub fn texture_layer(&self) -> u32 {
        self.tex_coord[2] as u32
    }
}
