#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! Procedural block terrain split into fixed-size chunks, meshed down to the
//! faces that can actually be seen, and culled against the camera frustum
//! before drawing.
//!
//! ## Key Modules
//!
//! * `config` - World settings (seed, chunk extents, noise) loaded from JSON
//! * `error` - Error types for configuration and mesh ingestion
//! * `engine_state` - Voxel data, terrain generation, meshing, culling,
//!   task management and the world streamer
//!
//! ## Architecture
//!
//! The pipeline runs in one direction:
//! * A seeded height field fills chunk columns with layered blocks
//! * Each chunk is meshed into one quad per exposed block face
//! * The streamer hands every chunk's mesh and bounds to a renderer once
//! * Each frame, the renderer culls chunk bounds against the view frustum
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_world::{MeshCache, WorldConfig, WorldStreamer};
//!
//! let config = WorldConfig::default();
//! let mut streamer = WorldStreamer::new(&config, MeshCache::new()).unwrap();
//! streamer.generate_around(0.0, 0.0, 2).unwrap();
//! let ground = streamer.get_height(0.0, 0.0);
//! ```

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};
use log::info;

pub mod config;
pub mod engine_state;
pub mod error;

pub use config::WorldConfig;
pub use engine_state::rendering::{cull, Aabb, Frustum, Mesh, MeshCache, MeshHandle, MeshSink};
pub use engine_state::streamer::{StreamReport, WorldStreamer};
pub use engine_state::voxels::chunk::{Chunk, ChunkCoord};
pub use error::{ConfigError, IngestError, StreamError};

/// Number of chunk-widths the demo camera walks along +X.
const DEMO_STEPS: u32 = 4;

/// Streams a short walk across the world and logs what the camera would draw.
///
/// Reads a JSON [`WorldConfig`] from the path given as the first argument, or
/// uses the defaults. Logging is configured through `RUST_LOG`.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading world config from {}", path);
            WorldConfig::from_json_file(path)?
        }
        None => WorldConfig::default(),
    };

    let mut streamer = WorldStreamer::new(&config, MeshCache::new())?;
    let projection = perspective(Deg(70.0), 16.0 / 9.0, 0.1, 1000.0);

    for step in 0..DEMO_STEPS {
        let x = f64::from(step * config.chunk_size) + 0.5;
        let z = 0.5;

        let report = streamer.generate_around(x, z, config.stream_radius)?;
        let ground = streamer.get_height(x, z);

        let eye = Point3::new(x as f32, ground + 1.8, z as f32);
        let view = Matrix4::look_to_rh(eye, Vector3::new(0.0, -0.2, -1.0), Vector3::unit_y());
        let visible = streamer.sink().draw_list(&view, &projection);

        info!(
            "Step {}: ground at {:.1}, {} new chunks, {} of {} meshes visible",
            step,
            ground,
            report.generated,
            visible.len(),
            streamer.sink().len()
        );
    }

    info!(
        "Done: {} chunks loaded, {} streamed, {} vertices stored",
        streamer.store().len(),
        streamer.streamed_count(),
        streamer.sink().vertices_used()
    );

    Ok(())
}
