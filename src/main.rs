//! # Voxel World Entry Point
//!
//! Calls into the library's `run()` to stream a demo walk through a world.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- world.json
//! ```

fn main() {
    if let Err(error) = voxel_world::run() {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
