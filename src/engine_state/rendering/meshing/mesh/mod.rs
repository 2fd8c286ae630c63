//! Mesh generation for voxel rendering.
//!
//! This module converts a chunk's block grid into a GPU-friendly triangle list.
//! Only faces that border air are emitted.
//!
//! # Architecture
//! - [`Mesh`]: vertex and index buffers for one chunk, and the visible-face mesher
//! - [`Face`]: one exposed unit face with its corners and texture layer

mod face;
mod mesh;

pub use face::{Face, QUAD_INDICES};
pub use mesh::*;
