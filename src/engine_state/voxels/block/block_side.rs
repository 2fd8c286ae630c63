//! # Block Side Module
//!
//! This module defines the six faces of a unit-cube block and the fixed
//! geometry attached to each one: neighbor offset, outward normal and the
//! four counter-clockwise corners of the face.

use cgmath::{Point3, Vector3};

/// Represents the six possible faces of a voxel block.
///
/// The discriminant is the column index into the texture-layer table.
/// North faces -Z and south faces +Z: chunk indices and world coordinates
/// share one Z direction.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// +Y
    Top = 0,
    /// -Y
    Bottom = 1,
    /// -Z
    North = 2,
    /// +Z
    South = 3,
    /// +X
    East = 4,
    /// -X
    West = 5,
}

/// Corners of each face of the unit cube at the origin, wound
/// counter-clockwise when viewed from outside the cube.
#[rustfmt::skip]
const UNIT_CUBE_FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // Top (y = 1)
    [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
    // Bottom (y = 0)
    [[1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]],
    // North (z = 0)
    [[1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    // South (z = 1)
    [[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]],
    // East (x = 1)
    [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
    // West (x = 0)
    [[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0]],
];

impl BlockSide {
    /// Returns an array containing all six block faces in table order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::Top,
            BlockSide::Bottom,
            BlockSide::North,
            BlockSide::South,
            BlockSide::East,
            BlockSide::West,
        ]
    }

    /// Offset from a block to the neighbor this face looks at.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        match self {
            BlockSide::Top => Vector3::new(0, 1, 0),
            BlockSide::Bottom => Vector3::new(0, -1, 0),
            BlockSide::North => Vector3::new(0, 0, -1),
            BlockSide::South => Vector3::new(0, 0, 1),
            BlockSide::East => Vector3::new(1, 0, 0),
            BlockSide::West => Vector3::new(-1, 0, 0),
        }
    }

    /// Unit outward normal of the face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.neighbor_offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }

    /// The four face corners of a unit cube whose minimum corner is the origin.
    pub fn unit_corners(self) -> [Point3<f32>; 4] {
        UNIT_CUBE_FACE_CORNERS[self as usize].map(Point3::from)
    }
}
