//! Integer chunk coordinates and conversions between world space and
//! chunk-local block space.
//!
//! One convention is used everywhere: `world_x = chunk_x * size + bx` and
//! `world_z = chunk_z * size + bz`. Generation, height queries and meshing all
//! go through these two functions.
//!
//! Chunk indices are `i32`, so the world ends at the last block of chunk
//! `i32::MIN` and chunk `i32::MAX`. Positions past that edge resolve to the
//! nearest edge column, and neighborhoods near it only include chunks that
//! exist.

use std::fmt;

/// Horizontal position of a chunk in chunk units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub fn new(x: i32, z: i32) -> Self {
        ChunkCoord { x, z }
    }

    /// Chebyshev distance in chunks.
    pub fn chebyshev_distance(self, other: ChunkCoord) -> u32 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dz = (self.z as i64 - other.z as i64).unsigned_abs();
        dx.max(dz) as u32
    }

    /// Every coordinate within `radius` chunks (Chebyshev, inclusive), row by row
    /// from the most negative z. Coordinates past the world edge are skipped.
    pub fn square_around(self, radius: u32) -> impl Iterator<Item = ChunkCoord> {
        let radius = radius.min(i32::MAX as u32) as i32;
        (-radius..=radius).flat_map(move |dz| {
            (-radius..=radius).filter_map(move |dx| {
                Some(ChunkCoord::new(
                    self.x.checked_add(dx)?,
                    self.z.checked_add(dz)?,
                ))
            })
        })
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// A world position resolved to its owning chunk and the column inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColumnLocation {
    pub chunk: ChunkCoord,
    pub bx: i32,
    pub bz: i32,
}

/// Resolves a world-space (x, z) to the chunk that owns it.
///
/// Positions are floored first, so `-0.5` belongs to block `-1` of chunk `-1`.
/// Positions beyond the world edge are clamped onto the edge column.
pub fn world_to_chunk(world_x: f64, world_z: f64, chunk_size: u32) -> ColumnLocation {
    let size = chunk_size as i64;
    let (lowest, highest) = world_block_range(chunk_size);
    let wx = (world_x.floor() as i64).clamp(lowest, highest);
    let wz = (world_z.floor() as i64).clamp(lowest, highest);
    ColumnLocation {
        chunk: ChunkCoord::new(wx.div_euclid(size) as i32, wz.div_euclid(size) as i32),
        bx: wx.rem_euclid(size) as i32,
        bz: wz.rem_euclid(size) as i32,
    }
}

/// First and last world block coordinate addressable with `chunk_size` chunks.
pub fn world_block_range(chunk_size: u32) -> (i64, i64) {
    let size = chunk_size as i64;
    (i32::MIN as i64 * size, (i32::MAX as i64 + 1) * size - 1)
}

/// World-space block coordinates of local column (bx, bz) in `coord`.
pub fn chunk_to_world(coord: ChunkCoord, bx: i32, bz: i32, chunk_size: u32) -> (i64, i64) {
    let size = chunk_size as i64;
    (
        coord.x as i64 * size + bx as i64,
        coord.z as i64 * size + bz as i64,
    )
}
