//! Terrain generation tests: determinism, seed handling and continuity of the
//! height field across chunk boundaries.

use voxel_world::engine_state::voxels::block::block_type::BlockType;
use voxel_world::engine_state::voxels::chunk::{chunk_to_world, ChunkCoord};
use voxel_world::engine_state::voxels::generator::TerrainGenerator;
use voxel_world::{MeshCache, WorldConfig, WorldStreamer};

fn config_with_seed(seed: u32) -> WorldConfig {
    WorldConfig {
        seed,
        chunk_size: 16,
        max_height: 128,
        ..WorldConfig::default()
    }
}

#[test]
fn same_seed_gives_identical_chunks() {
    let mut first = WorldStreamer::new(&config_with_seed(1234), MeshCache::new()).unwrap();
    let mut second = WorldStreamer::new(&config_with_seed(1234), MeshCache::new()).unwrap();

    for (cx, cz) in [(0, 0), (3, -2), (-7, 5)] {
        let a = first.get_chunk(cx, cz).clone();
        let b = second.get_chunk(cx, cz);
        assert_eq!(a.blocks(), b.blocks(), "blocks of chunk ({cx}, {cz})");
        assert_eq!(a.mesh(), b.mesh(), "mesh of chunk ({cx}, {cz})");
    }
}

#[test]
fn repeated_get_chunk_returns_the_stored_chunk() {
    let mut streamer = WorldStreamer::new(&config_with_seed(9), MeshCache::new()).unwrap();
    let first = streamer.get_chunk(2, 2).clone();
    assert_eq!(streamer.store().len(), 1);

    let again = streamer.get_chunk(2, 2);
    assert_eq!(first.blocks(), again.blocks());
    assert_eq!(streamer.store().len(), 1);
}

#[test]
fn different_seeds_give_different_terrain() {
    let a = TerrainGenerator::new(&config_with_seed(1));
    let b = TerrainGenerator::new(&config_with_seed(2));

    let differs = (0..64)
        .flat_map(|x| (0..64).map(move |z| (x * 7, z * 7)))
        .any(|(x, z)| a.height_at_world(x, z) != b.height_at_world(x, z));
    assert!(differs);
}

#[test]
fn chunk_columns_follow_the_world_height_field() {
    let config = config_with_seed(77);
    let mut streamer = WorldStreamer::new(&config, MeshCache::new()).unwrap();
    let generator = streamer.store().generator().clone();

    for coord in [ChunkCoord::new(0, 0), ChunkCoord::new(-1, 0), ChunkCoord::new(-3, -4)] {
        let chunk = streamer.get_chunk(coord.x, coord.z);
        for bz in 0..16 {
            for bx in 0..16 {
                let (wx, wz) = chunk_to_world(coord, bx, bz, 16);
                let expected = generator.height_at_world(wx, wz) as u32;
                assert_eq!(chunk.column_height(bx, bz), expected, "column ({wx}, {wz})");
            }
        }
    }
}

#[test]
fn height_field_is_continuous_across_chunk_edges() {
    let config = config_with_seed(5);
    let mut streamer = WorldStreamer::new(&config, MeshCache::new()).unwrap();

    // Pairs of neighboring columns that straddle an edge along X and along Z.
    for cx in -3..3 {
        let west = streamer.get_chunk(cx, 0).clone();
        let east = streamer.get_chunk(cx + 1, 0);
        for bz in 0..16 {
            let step = west.column_height(15, bz) as i64 - east.column_height(0, bz) as i64;
            assert!(step.abs() <= 4, "step of {step} between chunks {cx} and {}", cx + 1);
        }
    }
    for cz in -3..3 {
        let north = streamer.get_chunk(0, cz).clone();
        let south = streamer.get_chunk(0, cz + 1);
        for bx in 0..16 {
            let step = north.column_height(bx, 15) as i64 - south.column_height(bx, 0) as i64;
            assert!(step.abs() <= 4, "step of {step} between chunks {cz} and {}", cz + 1);
        }
    }
}

#[test]
fn get_height_matches_the_column_under_the_point() {
    let config = config_with_seed(31);
    let mut streamer = WorldStreamer::new(&config, MeshCache::new()).unwrap();
    let generator = streamer.store().generator().clone();

    for (x, z) in [(0.5, 0.5), (-0.25, 3.75), (-17.9, -40.1), (123.0, -5.5)] {
        let expected = generator.height_at_world(f64::floor(x) as i64, f64::floor(z) as i64) as f32;
        assert_eq!(streamer.get_height(x, z), expected, "height at ({x}, {z})");
    }
}

#[test]
fn generated_columns_are_layered() {
    let config = config_with_seed(3);
    let mut streamer = WorldStreamer::new(&config, MeshCache::new()).unwrap();
    let chunk = streamer.get_chunk(1, -1);

    for bz in 0..16 {
        for bx in 0..16 {
            let height = chunk.column_height(bx, bz) as i32;
            assert!(height >= 1);
            assert_eq!(chunk.get_block(bx, 0, bz), BlockType::Bedrock);
            if height > 1 {
                assert_eq!(chunk.get_block(bx, height - 1, bz), BlockType::Grass);
            }
            for by in height..128 {
                assert_eq!(chunk.get_block(bx, by, bz), BlockType::Air);
            }
        }
    }
}
