use cgmath::{EuclideanSpace, Point3};

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType, Block};

/// Texture coordinates of the four corners of every face.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

/// Index pattern of a quad: two counter-clockwise triangles sharing corner 0.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// A single exposed unit face of a block, in world space.
///
/// The four corners are ordered counter-clockwise as seen from outside the
/// block, so triangles (0, 1, 2) and (0, 2, 3) face along `block_side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corners of the face in world coordinates
    pub corners: [Point3<f32>; 4],
    /// Which side of the block this face represents
    pub block_side: BlockSide,
    /// Texture-array layer for this side of the block type
    pub texture_layer: u32,
}

impl Face {
    /// Creates the face of the block whose minimum corner is `origin`.
    ///
    /// # Arguments
    /// * `origin` - World-space minimum corner of the block
    /// * `block_type` - The type of the block, used for texture lookup
    /// * `block_side` - Which side of the block this face represents
    pub fn new(origin: Point3<f32>, block_type: BlockType, block_side: BlockSide) -> Self {
        let offset = origin.to_vec();
        Face {
            corners: block_side.unit_corners().map(|corner| corner + offset),
            block_side,
            texture_layer: Block::texture_layer(block_type, block_side),
        }
    }

    /// The four vertices of the face, in corner order.
    pub fn vertices(&self) -> [Vertex; 4] {
        let normal = self.block_side.normal();
        [0, 1, 2, 3].map(|i| Vertex::new(self.corners[i], normal, FACE_UVS[i], self.texture_layer))
    }
}
