//! # World Configuration
//!
//! World seed, chunk extents and noise parameters are fixed when the world
//! generator is constructed. They are read from JSON so a world can be
//! reproduced from a small settings file; every field has a default so a
//! partial file (or `{}`) is valid.
//!
//! ```json
//! { "seed": 1337, "chunk_size": 16, "stream_radius": 4 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::chunk::ChunkDimensions;
use crate::error::ConfigError;

/// Largest horizontal extent accepted for a chunk.
pub const MAX_CHUNK_SIZE: u32 = 256;
/// Highest vertical extent accepted for a chunk.
pub const MAX_CHUNK_HEIGHT: u32 = 4096;
/// Highest octave count accepted for the terrain noise.
pub const MAX_OCTAVES: usize = 16;

/// Settings for a procedurally generated world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Seed of the terrain noise. Set once per world; chunks never reseed.
    pub seed: u32,
    /// Horizontal extent of a chunk in blocks (power of two, at most 256).
    pub chunk_size: u32,
    /// Vertical extent of a chunk in blocks.
    pub max_height: u32,
    /// Terrain height where the noise is zero.
    pub base_height: i32,
    /// Scale applied to the noise value before it is added to `base_height`.
    pub amplitude: f64,
    /// Frequency of the first noise octave, in cycles per block.
    pub frequency: f64,
    /// Number of noise layers summed into the height field.
    pub octaves: usize,
    /// Amplitude multiplier from one octave to the next.
    pub persistence: f64,
    /// Frequency multiplier from one octave to the next.
    pub lacunarity: f64,
    /// Chunk radius streamed around the focus point by the demo binary.
    pub stream_radius: u32,
    /// Worker threads used for chunk generation. `0` streams synchronously.
    pub workers: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            seed: 0,
            chunk_size: 32,
            max_height: 256,
            base_height: 64,
            amplitude: 31.0,
            frequency: 0.005,
            octaves: 3,
            persistence: 0.5,
            lacunarity: 2.0,
            stream_radius: 2,
            workers: 0,
        }
    }
}

impl WorldConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that the configuration describes a world that can be generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.chunk_size.is_power_of_two() || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if self.max_height == 0 || self.max_height > MAX_CHUNK_HEIGHT {
            return Err(ConfigError::InvalidMaxHeight(self.max_height));
        }
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(ConfigError::InvalidOctaves(self.octaves));
        }
        if self.base_height < 1 || self.base_height > self.max_height as i32 {
            return Err(ConfigError::InvalidBaseHeight {
                base_height: self.base_height,
                max_height: self.max_height,
            });
        }
        Ok(())
    }

    /// Block extents of every chunk in this world.
    pub fn dimensions(&self) -> ChunkDimensions {
        ChunkDimensions::new(self.chunk_size, self.max_height)
    }
}
