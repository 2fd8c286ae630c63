//! # Frustum Culling
//!
//! Chunk bounds are axis-aligned boxes stored as center + half-extents. The view
//! frustum is six planes pulled out of the combined `projection * view` matrix
//! (Gribb–Hartmann). A box is culled when it lies entirely on the outer side of
//! at least one plane.
//!
//! Planes are normalized at extraction, and the projection radius of a box is
//! measured along that normalized normal, so both sides of the comparison are in
//! world units.
//!
//! The test is conservative: a box near a frustum corner can survive while
//! being outside the frustum, but a visible box is never culled.

use cgmath::{EuclideanSpace, InnerSpace, Matrix, Matrix4, Point3, Vector3, Vector4};

use crate::engine_state::voxels::chunk::{chunk_to_world, ChunkCoord, ChunkDimensions};

/// Plane `dot(normal, p) - distance = 0`. Points with a positive value are inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub distance: f32,
}

impl Plane {
    /// Builds a normalized plane from the coefficients `(a, b, c, w)` of
    /// `a·x + b·y + c·z + w >= 0`.
    pub fn from_coefficients(coefficients: Vector4<f32>) -> Self {
        let normal = coefficients.truncate();
        let length = normal.magnitude();
        if length <= f32::EPSILON {
            // Degenerate row combination: a plane that keeps everything.
            return Plane {
                normal: Vector3::new(0.0, 0.0, 0.0),
                distance: f32::NEG_INFINITY,
            };
        }
        Plane {
            normal: normal / length,
            distance: -coefficients.w / length,
        }
    }

    /// Signed distance of `point`; positive on the inner side.
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.normal.dot(point.to_vec()) - self.distance
    }
}

/// Axis-aligned bounding box as center and half-extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub center: Point3<f32>,
    pub extents: Vector3<f32>,
}

impl Aabb {
    /// Box spanning two opposite corners, in any order.
    pub fn from_corners(a: Point3<f32>, b: Point3<f32>) -> Self {
        let delta = b - a;
        Aabb {
            center: a.midpoint(b),
            extents: Vector3::new(delta.x.abs(), delta.y.abs(), delta.z.abs()) * 0.5,
        }
    }

    /// World-space volume a chunk can occupy: its horizontal footprint times the
    /// full vertical extent. Every vertex the chunk's mesh can emit lies inside.
    pub fn chunk_footprint(coord: ChunkCoord, dimensions: ChunkDimensions) -> Self {
        let (world_x, world_z) = chunk_to_world(coord, 0, 0, dimensions.size);
        let min = Point3::new(world_x as f32, 0.0, world_z as f32);
        let max = min + Vector3::new(
            dimensions.size as f32,
            dimensions.height as f32,
            dimensions.size as f32,
        );
        Aabb::from_corners(min, max)
    }

    pub fn min(&self) -> Point3<f32> {
        self.center - self.extents
    }

    pub fn max(&self) -> Point3<f32> {
        self.center + self.extents
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: Point3<f32>) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&point.x)
            && (min.y..=max.y).contains(&point.y)
            && (min.z..=max.z).contains(&point.z)
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (min, max) = (self.min(), self.max());
        [
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(min.x, max.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(min.x, min.y, max.z),
            Point3::new(max.x, min.y, max.z),
            Point3::new(min.x, max.y, max.z),
            Point3::new(max.x, max.y, max.z),
        ]
    }

    /// Half the width of the box projected onto `normal`.
    pub fn projection_radius(&self, normal: Vector3<f32>) -> f32 {
        (self.extents.x * normal.x).abs()
            + (self.extents.y * normal.y).abs()
            + (self.extents.z * normal.z).abs()
    }
}

/// Clip-space depth range of the projection matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DepthRange {
    /// OpenGL style, `-w <= z <= w`. What `cgmath::perspective` produces.
    #[default]
    NegativeOneToOne,
    /// Vulkan / wgpu style, `0 <= z <= w`.
    ZeroToOne,
}

/// Where a box sits relative to the frustum.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Containment {
    /// Fully outside at least one plane.
    Outside,
    /// Straddles at least one plane and is outside none.
    Intersecting,
    /// Fully inside every plane.
    Inside,
}

/// Six inward-facing planes: left, right, bottom, top, near, far.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extracts the frustum of a combined `projection * view` matrix with an
    /// OpenGL depth range.
    pub fn from_view_projection(view_projection: &Matrix4<f32>) -> Self {
        Self::from_matrix(view_projection, DepthRange::NegativeOneToOne)
    }

    /// Extracts the frustum from separate view and projection matrices.
    pub fn from_view_and_projection(view: &Matrix4<f32>, projection: &Matrix4<f32>) -> Self {
        Self::from_view_projection(&(projection * view))
    }

    /// Gribb–Hartmann extraction. Each plane is a sum or difference of the
    /// matrix's fourth row with one of the first three.
    pub fn from_matrix(m: &Matrix4<f32>, depth_range: DepthRange) -> Self {
        let (row0, row1, row2, row3) = (m.row(0), m.row(1), m.row(2), m.row(3));

        let near = match depth_range {
            DepthRange::NegativeOneToOne => row3 + row2,
            DepthRange::ZeroToOne => row2,
        };

        Frustum {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(near),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Classifies `aabb` against all six planes.
    pub fn classify(&self, aabb: &Aabb) -> Containment {
        let mut containment = Containment::Inside;
        for plane in &self.planes {
            let radius = aabb.projection_radius(plane.normal);
            let distance = plane.signed_distance(aabb.center);
            if distance < -radius {
                return Containment::Outside;
            }
            if distance <= radius {
                containment = Containment::Intersecting;
            }
        }
        containment
    }

    /// Returns `true` if `aabb` is entirely outside the frustum.
    pub fn culls(&self, aabb: &Aabb) -> bool {
        cull(self, aabb)
    }
}

/// Returns `true` if `aabb` is entirely on the outer side of some frustum plane.
pub fn cull(frustum: &Frustum, aabb: &Aabb) -> bool {
    frustum.planes.iter().any(|plane| {
        plane.signed_distance(aabb.center) < -aabb.projection_radius(plane.normal)
    })
}
