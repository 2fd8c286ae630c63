//! Frustum culling tests: the culler never discards a visible box, and it does
//! discard boxes that are clearly outside.

use cgmath::{perspective, Deg, Matrix4, Point3, Rad, SquareMatrix, Vector3, Vector4};
use voxel_world::engine_state::rendering::culling::{Containment, DepthRange};
use voxel_world::{cull, Aabb, Frustum, MeshCache, WorldConfig, WorldStreamer};

struct Camera {
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
}

impl Camera {
    fn random(rng: &mut fastrand::Rng) -> Self {
        let eye = Point3::new(
            rng.f32() * 200.0 - 100.0,
            rng.f32() * 100.0,
            rng.f32() * 200.0 - 100.0,
        );
        let yaw = rng.f32() * std::f32::consts::TAU;
        let pitch = (rng.f32() - 0.5) * 2.5;
        let direction = Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        Camera {
            view: Matrix4::look_to_rh(eye, direction, Vector3::unit_y()),
            projection: perspective(Rad(0.6 + rng.f32() * 1.2), 0.5 + rng.f32() * 2.0, 1.0, 300.0),
        }
    }

    fn eye(&self) -> Point3<f32> {
        let to_world = self.view.invert().expect("view is invertible");
        let eye = to_world * Vector4::new(0.0, 0.0, 0.0, 1.0);
        Point3::new(eye.x, eye.y, eye.z)
    }

    fn frustum(&self) -> Frustum {
        Frustum::from_view_and_projection(&self.view, &self.projection)
    }

    /// Maps a normalized-device point back to world space.
    fn unproject(&self, ndc: Vector4<f32>) -> Point3<f32> {
        let inverse = (self.projection * self.view)
            .invert()
            .expect("view-projection is invertible");
        let world = inverse * ndc;
        Point3::new(world.x / world.w, world.y / world.w, world.z / world.w)
    }
}

fn random_extents(rng: &mut fastrand::Rng) -> Vector3<f32> {
    Vector3::new(rng.f32() * 20.0, rng.f32() * 20.0, rng.f32() * 20.0)
}

#[test]
fn boxes_around_visible_points_are_never_culled() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);

    for _ in 0..200 {
        let camera = Camera::random(&mut rng);
        let frustum = camera.frustum();

        for _ in 0..50 {
            let ndc = Vector4::new(
                rng.f32() * 1.8 - 0.9,
                rng.f32() * 1.8 - 0.9,
                rng.f32() * 1.8 - 0.9,
                1.0,
            );
            let point = camera.unproject(ndc);
            let aabb = Aabb {
                center: point,
                extents: random_extents(&mut rng),
            };
            assert!(!cull(&frustum, &aabb), "culled a box around visible point {point:?}");
            assert_ne!(frustum.classify(&aabb), Containment::Outside);
        }
    }
}

#[test]
fn boxes_fully_beyond_a_plane_are_culled() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..200 {
        let camera = Camera::random(&mut rng);
        let frustum = camera.frustum();

        for plane in &frustum.planes {
            let extents = random_extents(&mut rng);
            let radius = extents.x * plane.normal.x.abs()
                + extents.y * plane.normal.y.abs()
                + extents.z * plane.normal.z.abs();
            let margin = 0.5 + rng.f32() * 50.0;

            // Project a point onto the plane, then push the box out past it.
            let anchor = camera.unproject(Vector4::new(0.0, 0.0, 0.0, 1.0));
            let on_plane = anchor - plane.normal * plane.signed_distance(anchor);
            let center = on_plane - plane.normal * (radius + margin);

            let aabb = Aabb { center, extents };
            assert!(cull(&frustum, &aabb));
            assert_eq!(frustum.classify(&aabb), Containment::Outside);
        }
    }
}

/// `true` if every corner, taken through `view_projection` into clip space,
/// fails the same one of the six clip inequalities.
fn corners_share_a_clip_plane(view_projection: &Matrix4<f32>, aabb: &Aabb) -> bool {
    let clip: Vec<Vector4<f32>> = aabb
        .corners()
        .iter()
        .map(|corner| *view_projection * corner.to_homogeneous())
        .collect();
    let tests: [fn(&Vector4<f32>) -> f32; 6] = [
        |c| c.x + c.w,
        |c| c.w - c.x,
        |c| c.y + c.w,
        |c| c.w - c.y,
        |c| c.z + c.w,
        |c| c.w - c.z,
    ];
    tests.iter().any(|inside| {
        clip.iter().all(|c| {
            let scale = c.x.abs().max(c.y.abs()).max(c.z.abs()).max(c.w.abs()).max(1.0);
            inside(c) < -1e-3 * scale
        })
    })
}

#[test]
fn boxes_outside_a_clip_plane_are_culled() {
    let mut rng = fastrand::Rng::with_seed(0xc11f);
    let mut outside = 0;

    for _ in 0..100 {
        let camera = Camera::random(&mut rng);
        let view_projection = camera.projection * camera.view;
        let frustum = camera.frustum();

        for _ in 0..100 {
            let center = Point3::new(
                rng.f32() * 800.0 - 400.0,
                rng.f32() * 400.0 - 150.0,
                rng.f32() * 800.0 - 400.0,
            );
            let aabb = Aabb {
                center,
                extents: random_extents(&mut rng),
            };
            if !corners_share_a_clip_plane(&view_projection, &aabb) {
                continue;
            }
            outside += 1;
            assert!(cull(&frustum, &aabb), "kept box {aabb:?} with every corner outside one clip plane");
            assert_eq!(frustum.classify(&aabb), Containment::Outside);
        }
    }

    assert!(outside > 1000, "only {outside} boxes fell outside a clip plane");
}

#[test]
fn culled_boxes_have_every_corner_outside_one_plane() {
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..100 {
        let camera = Camera::random(&mut rng);
        let frustum = camera.frustum();

        for _ in 0..100 {
            let center = Point3::new(
                rng.f32() * 600.0 - 300.0,
                rng.f32() * 300.0 - 100.0,
                rng.f32() * 600.0 - 300.0,
            );
            let aabb = Aabb {
                center,
                extents: random_extents(&mut rng),
            };
            if !cull(&frustum, &aabb) {
                continue;
            }
            let separated = frustum.planes.iter().any(|plane| {
                aabb.corners()
                    .iter()
                    .all(|&corner| plane.signed_distance(corner) < 1e-3)
            });
            assert!(separated, "culled box {aabb:?} is not separated by any plane");
        }
    }
}

#[test]
fn box_containing_the_camera_is_kept() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..100 {
        let camera = Camera::random(&mut rng);
        // Wide enough to reach past the near plane.
        let aabb = Aabb {
            center: camera.eye(),
            extents: Vector3::new(2.0, 2.0, 2.0),
        };
        assert!(!camera.frustum().culls(&aabb));
    }
}

#[test]
fn zero_to_one_extraction_keeps_points_inside() {
    #[rustfmt::skip]
    let to_zero_one: Matrix4<f32> = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.5, 0.0,
        0.0, 0.0, 0.5, 1.0,
    );
    let view = Matrix4::look_to_rh(Point3::new(0.0, 10.0, 0.0), Vector3::new(1.0, 0.0, 0.0), Vector3::unit_y());
    let projection = to_zero_one * perspective(Deg(60.0), 1.5, 0.5, 100.0);
    let frustum = Frustum::from_matrix(&(projection * view), DepthRange::ZeroToOne);

    let ahead = Aabb::from_corners(Point3::new(20.0, 9.0, -1.0), Point3::new(22.0, 11.0, 1.0));
    let behind = Aabb::from_corners(Point3::new(-22.0, 9.0, -1.0), Point3::new(-20.0, 11.0, 1.0));
    assert!(!cull(&frustum, &ahead));
    assert!(cull(&frustum, &behind));
}

#[test]
fn streamed_chunk_under_the_camera_is_drawn() {
    let config = WorldConfig {
        chunk_size: 16,
        max_height: 128,
        ..WorldConfig::default()
    };
    let mut streamer = WorldStreamer::new(&config, MeshCache::new()).unwrap();
    streamer.generate_around(8.0, 8.0, 2).unwrap();
    let ground = streamer.get_height(8.0, 8.0);

    let view = Matrix4::look_to_rh(
        Point3::new(8.0, ground + 2.0, 8.0),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::unit_y(),
    );
    let projection = perspective(Deg(70.0), 16.0 / 9.0, 0.1, 200.0);
    let visible = streamer.sink().draw_list(&view, &projection);

    let own = streamer
        .mesh_handle(voxel_world::ChunkCoord::new(0, 0))
        .unwrap();
    assert!(visible.contains(&own));
    assert!(visible.len() < streamer.sink().len(), "chunks behind the camera are culled");
}
