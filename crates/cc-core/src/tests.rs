#[cfg(test)]
mod tests {
    use crate::camera::{CameraState, ProjectionMode, Viewport};
    use crate::config::{CameraConfig, Config};
    use crate::error::Error;
    use crate::math::{cos_from_sin, sin, Matrix4, Vector3, Vector4};
    use crate::picking::{self, HitTest, PickResult, Ray};
    use crate::scene::{Cube, Scene};
    use crate::session::{CameraKey, KeyAction, Session};

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance * scale,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_matrix_close(actual: &Matrix4, expected: &[f32; 16], tolerance: f32) {
        for (a, e) in actual.to_cols_array().iter().zip(expected.iter()) {
            assert_close(*a, *e, tolerance);
        }
    }

    fn glam_vec(v: Vector3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }

    fn sample_transform() -> Matrix4 {
        Matrix4::new()
            .translate(1.0, -2.0, 3.5)
            .rotate_x(0.3)
            .rotate_y(-0.7)
            .scale(2.0, 0.5, 1.5)
    }

    // --- Matrix4 ------------------------------------------------------------

    #[test]
    fn test_new_matrix_is_identity() {
        let m = Matrix4::new();
        assert_eq!(m, Matrix4::IDENTITY);
        assert_eq!(m, Matrix4::default());
        assert_eq!((m.m00, m.m11, m.m22, m.m33), (1.0, 1.0, 1.0, 1.0));
        let off_diagonal = [
            m.m01, m.m02, m.m03, m.m10, m.m12, m.m13, m.m20, m.m21, m.m23, m.m30, m.m31, m.m32,
        ];
        assert!(off_diagonal.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_translate_uses_own_basis() {
        let m = Matrix4::new().scale(2.0, 3.0, 4.0).translate(1.0, 1.0, 1.0);
        assert_eq!((m.m30, m.m31, m.m32, m.m33), (2.0, 3.0, 4.0, 1.0));
        // Only the last column moves.
        assert_eq!((m.m00, m.m11, m.m22), (2.0, 3.0, 4.0));
    }

    #[test]
    fn test_scale_leaves_translation_column() {
        let m = Matrix4::new().translate(5.0, 6.0, 7.0).scale(2.0, 2.0, 2.0);
        assert_eq!((m.m30, m.m31, m.m32), (5.0, 6.0, 7.0));
        assert_eq!((m.m00, m.m11, m.m22), (2.0, 2.0, 2.0));
    }

    #[test]
    fn test_rotations_match_glam() {
        for angle in [-2.5f32, -0.7, 0.0, 0.3, 1.2, 3.0, 4.4] {
            let ours = Matrix4::new().rotate_x(angle);
            assert_matrix_close(&ours, &glam::Mat4::from_rotation_x(angle).to_cols_array(), 1e-6);

            let ours = Matrix4::new().rotate_y(angle);
            assert_matrix_close(&ours, &glam::Mat4::from_rotation_y(angle).to_cols_array(), 1e-6);
        }
    }

    #[test]
    fn test_composition_is_right_multiplication() {
        let ours = sample_transform();
        let expected = glam::Mat4::from_translation(glam::Vec3::new(1.0, -2.0, 3.5))
            * glam::Mat4::from_rotation_x(0.3)
            * glam::Mat4::from_rotation_y(-0.7)
            * glam::Mat4::from_scale(glam::Vec3::new(2.0, 0.5, 1.5));
        assert_matrix_close(&ours, &expected.to_cols_array(), 1e-5);
    }

    #[test]
    fn test_perspective_matches_glam() {
        let fovy = 45.0f32.to_radians();
        let ours = Matrix4::new().perspective_generic(fovy, 16.0 / 9.0, 0.1, 100.0, false);
        let expected = glam::Mat4::perspective_rh_gl(fovy, 16.0 / 9.0, 0.1, 100.0);
        assert_matrix_close(&ours, &expected.to_cols_array(), 1e-5);
        assert_eq!(ours.m23, -1.0);
        assert_eq!(ours.m33, 0.0);
    }

    #[test]
    fn test_perspective_zero_to_one_depth() {
        let fovy = 60.0f32.to_radians();
        let ours = Matrix4::new().perspective_generic(fovy, 1.5, 0.5, 50.0, true);
        let expected = glam::Mat4::perspective_rh(fovy, 1.5, 0.5, 50.0);
        assert_matrix_close(&ours, &expected.to_cols_array(), 1e-5);
    }

    #[test]
    fn test_perspective_infinite_ranges_stay_finite() {
        let fovy = 45.0f32.to_radians();

        let far_inf = Matrix4::new().perspective_generic(fovy, 1.0, 0.1, f32::INFINITY, false);
        assert!(far_inf.is_finite());
        assert_eq!(far_inf.m22, 1e-6 - 1.0);
        assert_eq!(far_inf.m32, (1e-6 - 2.0) * 0.1);

        let far_inf_01 = Matrix4::new().perspective_generic(fovy, 1.0, 0.1, f32::INFINITY, true);
        assert_eq!(far_inf_01.m32, (1e-6 - 1.0) * 0.1);

        let near_inf = Matrix4::new().perspective_generic(fovy, 1.0, f32::INFINITY, 0.1, false);
        assert!(near_inf.is_finite());
        assert_eq!(near_inf.m22, 1.0 - 1e-6);
        assert_eq!(near_inf.m32, (2.0 - 1e-6) * 0.1);
    }

    #[test]
    fn test_ortho_matches_glam() {
        let ours = Matrix4::new().ortho(-4.0, 4.0, -4.0, 4.0, 0.5, 10000.0, false);
        let expected = glam::Mat4::orthographic_rh_gl(-4.0, 4.0, -4.0, 4.0, 0.5, 10000.0);
        assert_matrix_close(&ours, &expected.to_cols_array(), 1e-5);

        let ours = Matrix4::new().ortho(0.0, 1920.0, 1080.0, 0.0, -1.0, 1.0, true);
        let expected = glam::Mat4::orthographic_rh(0.0, 1920.0, 1080.0, 0.0, -1.0, 1.0);
        assert_matrix_close(&ours, &expected.to_cols_array(), 1e-5);
    }

    #[test]
    fn test_look_at_matches_glam() {
        let eye = Vector3::new(4.0, 3.0, 3.0);
        let ours = Matrix4::new().look_at_generic(eye, Vector3::ZERO, Vector3::Y);
        let expected = glam::Mat4::look_at_rh(glam_vec(eye), glam::Vec3::ZERO, glam::Vec3::Y);
        assert_matrix_close(&ours, &expected.to_cols_array(), 1e-5);

        // The eye lands on the view-space origin.
        let eye_in_view = Vector4::from_point(eye).mul(&ours);
        assert_close(eye_in_view.x, 0.0, 1e-5);
        assert_close(eye_in_view.y, 0.0, 1e-5);
        assert_close(eye_in_view.z, 0.0, 1e-5);
    }

    #[test]
    fn test_invert_round_trip() {
        let fovy = 45.0f32.to_radians();
        let matrices = [
            sample_transform(),
            Matrix4::new().perspective_generic(fovy, 16.0 / 9.0, 0.1, 100.0, false),
            Matrix4::new().look_at_generic(Vector3::new(4.0, 3.0, 3.0), Vector3::ZERO, Vector3::Y),
            Matrix4::new().ortho(-4.0, 4.0, -4.0, 4.0, 0.5, 10000.0, false),
        ];

        for m in matrices {
            let round_trip = m.invert().invert();
            assert_matrix_close(&round_trip, &m.to_cols_array(), 1e-4);
        }
    }

    #[test]
    fn test_invert_matches_glam() {
        let m = sample_transform();
        let expected = glam::Mat4::from_cols_array(&m.to_cols_array()).inverse();
        assert_matrix_close(&m.invert(), &expected.to_cols_array(), 1e-5);
    }

    #[test]
    fn test_invert_singular_is_not_finite() {
        let singular = Matrix4::new().scale(0.0, 1.0, 1.0);
        assert!(!singular.invert().is_finite());
    }

    // --- Vectors and scalars -------------------------------------------------

    #[test]
    fn test_cos_from_sin_matches_cos() {
        let mut angle = -7.0f32;
        while angle < 7.0 {
            let cos = cos_from_sin(sin(angle), angle);
            let expected = (angle as f64).cos() as f32;
            assert_close(cos, expected, 1e-3);
            if expected.abs() > 1e-2 {
                assert_eq!(cos.signum(), expected.signum(), "sign differs at {angle}");
            }
            angle += 0.37;
        }
    }

    #[test]
    fn test_vector4_mul_and_div() {
        let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(v.mul(&Matrix4::IDENTITY), v);

        let moved = v.mul(&Matrix4::new().translate(1.0, 1.0, 1.0));
        assert_eq!(moved, Vector4::new(2.0, 3.0, 4.0, 1.0));

        let divided = Vector4::new(2.0, 4.0, 6.0, 2.0).div(2.0);
        assert_eq!(divided, Vector4::new(1.0, 2.0, 3.0, 1.0));

        let degenerate = Vector4::new(1.0, 0.0, -1.0, 0.0).div(0.0);
        assert!(degenerate.x.is_infinite());
        assert!(degenerate.y.is_nan());
    }

    #[test]
    fn test_vector3_helpers() {
        let a = Vector3::new(1.0, 2.0, 2.0);
        assert_eq!(a.length(), 3.0);
        assert_eq!(a.distance_squared(Vector3::ZERO), 9.0);
        assert_close(a.normalize().length(), 1.0, 1e-6);
        assert_eq!(Vector3::new(1.0, 0.0, 0.0).cross(Vector3::Y), Vector3::new(0.0, 0.0, 1.0));

        let rotated = Vector3::new(4.0, 3.0, 3.0).rotate_y(std::f32::consts::FRAC_PI_2);
        assert_close(rotated.x, 3.0, 1e-5);
        assert_close(rotated.y, 3.0, 1e-6);
        assert_close(rotated.z, -4.0, 1e-5);
    }

    // --- Scene ---------------------------------------------------------------

    #[test]
    fn test_cube_aabb_is_frozen_until_refreshed() {
        let mut cube = Cube::new(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(cube.aabb_min(), Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(cube.aabb_max(), Vector3::new(2.0, 3.0, 4.0));
        assert!(!cube.is_active);

        cube.set_position(Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(cube.position(), Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(cube.aabb_min(), Vector3::new(0.0, 1.0, 2.0));

        cube.refresh_aabb();
        assert_eq!(cube.aabb_min(), Vector3::splat(4.0));
        assert_eq!(cube.aabb_max(), Vector3::splat(6.0));
    }

    #[test]
    fn test_default_scene() {
        let scene = Scene::from_config(&Config::default().scene).unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.cubes()[0].position(), Vector3::new(-3.0, 0.0, -3.0));
        assert_eq!(scene.cubes()[2].position(), Vector3::ZERO);
        assert_eq!(scene.active(), Some(2));
        assert_eq!(scene.active_count(), 1);
    }

    #[test]
    fn test_activate_out_of_range() {
        let mut scene = Scene::new();
        scene.push(Cube::new(Vector3::ZERO));
        match scene.activate(3) {
            Err(Error::IndexOutOfRange { index, len }) => assert_eq!((index, len), (3, 1)),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    // --- Ray/AABB ------------------------------------------------------------

    fn unit_box() -> (Vector3, Vector3) {
        (Vector3::splat(-1.0), Vector3::splat(1.0))
    }

    #[test]
    fn test_ray_hits_box() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(picking::intersects(&ray, min, max));
        assert!(picking::intersects_forward(&ray, min, max));
    }

    #[test]
    fn test_parallel_ray_misses_box() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vector3::new(5.0, 5.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(!picking::intersects(&ray, min, max));
        assert!(!picking::intersects_forward(&ray, min, max));
    }

    #[test]
    fn test_box_behind_origin() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(picking::intersects(&ray, min, max));
        assert!(!picking::intersects_forward(&ray, min, max));
    }

    #[test]
    fn test_diagonal_ray() {
        let (min, max) = unit_box();
        let diagonal = Vector3::new(-1.0, -1.0, -1.0).normalize();
        let through = Ray::new(Vector3::new(5.0, 5.0, 5.0), diagonal);
        assert!(picking::intersects(&through, min, max));

        let beside = Ray::new(Vector3::new(5.0, 8.0, 5.0), diagonal);
        assert!(!picking::intersects(&beside, min, max));
    }

    // --- Picking -------------------------------------------------------------

    fn scene_of(positions: &[Vector3]) -> Scene {
        let mut scene = Scene::new();
        for position in positions {
            scene.push(Cube::new(*position));
        }
        scene
    }

    #[test]
    fn test_pick_prefers_closest_origin_over_list_order() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let mut scene = scene_of(&[Vector3::new(0.0, 0.0, -3.0), Vector3::ZERO]);

        let result = picking::resolve(&ray, &mut scene, false, HitTest::Line);
        assert_eq!(result, PickResult::Selected(1));
        assert!(scene.cubes()[1].is_active);
        assert!(!scene.cubes()[0].is_active);
    }

    #[test]
    fn test_pick_uses_origin_distance_not_entry_point() {
        // `near` is entered first along the ray but its centre is farther away.
        let near = Vector3::new(4.9, 0.99, 0.99);
        let far = Vector3::new(5.0, 0.0, 0.0);
        let ray = Ray::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));

        let mut scene = scene_of(&[near, far]);
        assert!(HitTest::Line.test(&ray, &scene.cubes()[0]));
        let result = picking::resolve(&ray, &mut scene, false, HitTest::Line);
        assert_eq!(result, PickResult::Selected(1));

        let mut scene = scene_of(&[far, near]);
        let result = picking::resolve(&ray, &mut scene, false, HitTest::Line);
        assert_eq!(result, PickResult::Selected(0));
    }

    #[test]
    fn test_pick_through_camera_selects_front_cube() {
        let config = Config::default();
        let viewport = Viewport::new(config.window.width, config.window.height);
        let camera = CameraState::new(&config.camera, viewport);

        let behind_first = config.scene.cubes.clone();
        let front_first: Vec<Vector3> = behind_first.iter().rev().copied().collect();
        let origin_in = |cubes: &[Vector3]| cubes.iter().position(|c| *c == Vector3::ZERO);
        let origin_index = origin_in(&behind_first).unwrap();

        // Pixels where the click ray passes through the origin cube and at
        // least one cube behind it.
        let mut overlapping = 0;
        for y in (0..config.window.height).step_by(8) {
            for x in (0..config.window.width).step_by(8) {
                let (x, y) = (x as f32, y as f32);
                let ray = picking::unproject(x, y, viewport, camera.projection(), camera.view());
                let scene = scene_of(&behind_first);
                let hits: Vec<usize> = scene
                    .iter()
                    .enumerate()
                    .filter(|(_, cube)| HitTest::Line.test(&ray, cube))
                    .map(|(index, _)| index)
                    .collect();
                if hits.len() < 2 || !hits.contains(&origin_index) {
                    continue;
                }
                overlapping += 1;

                for cubes in [&behind_first, &front_first] {
                    let mut scene = scene_of(cubes);
                    let result = picking::pick(x, y, &camera, &mut scene, false, HitTest::Line);
                    assert_eq!(result, PickResult::Selected(origin_in(cubes).unwrap()));
                    assert_eq!(scene.active_count(), 1);
                }
            }
        }
        assert!(overlapping > 0, "no pixel overlaps the origin cube with another");
    }

    #[test]
    fn test_select_only_clears_other_flags() {
        let mut scene = scene_of(&[Vector3::ZERO, Vector3::splat(3.0), Vector3::splat(6.0)]);
        scene.activate(0).unwrap();

        scene.select_only(Some(1));
        assert_eq!(scene.active(), Some(1));
        assert_eq!(scene.active_count(), 1);

        scene.select_only(Some(9));
        assert_eq!(scene.active_count(), 0);

        scene.activate(2).unwrap();
        scene.select_only(None);
        assert_eq!(scene.active_count(), 0);
    }

    #[test]
    fn test_spawn_on_miss() {
        let mut scene = Scene::from_config(&Config::default().scene).unwrap();
        let ray = Ray::new(Vector3::new(10.0, 5.0, 10.0), Vector3::new(0.0, -1.0, 0.0));

        let result = picking::resolve(&ray, &mut scene, true, HitTest::Line);
        assert_eq!(result, PickResult::Spawned(3));
        assert_eq!(scene.len(), 4);

        let spawned = &scene.cubes()[3];
        assert_eq!(spawned.position(), Vector3::new(10.0, 0.0, 10.0));
        assert!(!spawned.is_active);
        assert_eq!(scene.active_count(), 0);
    }

    #[test]
    fn test_miss_without_spawn_only_deselects() {
        let mut scene = Scene::from_config(&Config::default().scene).unwrap();
        let ray = Ray::new(Vector3::new(10.0, 5.0, 10.0), Vector3::new(0.0, -1.0, 0.0));

        assert_eq!(picking::resolve(&ray, &mut scene, false, HitTest::Line), PickResult::Missed);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.active_count(), 0);
    }

    #[test]
    fn test_degenerate_spawn_target_is_not_finite() {
        let mut scene = scene_of(&[Vector3::new(0.0, -10.0, 0.0)]);
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

        let result = picking::resolve(&ray, &mut scene, true, HitTest::Line);
        assert_eq!(result, PickResult::Spawned(1));
        assert!(!scene.cubes()[1].position().is_finite());
    }

    #[test]
    fn test_unprojected_ray_passes_through_projected_point() {
        let viewport = Viewport::new(1920, 1080);
        let projection =
            Matrix4::new().perspective_generic(45.0f32.to_radians(), 16.0 / 9.0, 0.1, 100.0, false);
        let eye = Vector3::new(4.0, 3.0, 3.0);
        let view = Matrix4::new().look_at_generic(eye, Vector3::ZERO, Vector3::Y);

        for point in [Vector3::ZERO, Vector3::new(0.5, 0.25, -0.3), Vector3::new(-1.0, 1.0, 1.0)] {
            let clip = Vector4::from_point(point).mul(&view).mul(&projection);
            let ndc = clip.div(clip.w);
            let screen_x = (ndc.x + 1.0) * 0.5 * viewport.width;
            let screen_y = (1.0 - ndc.y) * 0.5 * viewport.height;

            let ray = picking::unproject(screen_x, screen_y, viewport, &projection, &view);
            assert_close(ray.direction.length(), 1.0, 1e-5);

            let to_point = point - ray.origin;
            let along = to_point.dot(ray.direction);
            let off_ray = to_point - ray.direction * along;
            assert!(off_ray.length() < 1e-3, "ray misses {:?} by {}", point, off_ray.length());
            assert!(along > 0.0);
        }
    }

    #[test]
    fn test_screen_to_ndc_flips_y() {
        let viewport = Viewport::new(200, 100);
        assert_eq!(picking::screen_to_ndc(0.0, 0.0, viewport), (-1.0, 1.0));
        assert_eq!(picking::screen_to_ndc(200.0, 100.0, viewport), (1.0, -1.0));
        assert_eq!(picking::screen_to_ndc(100.0, 50.0, viewport), (0.0, 0.0));
    }

    // --- Camera and session --------------------------------------------------

    #[test]
    fn test_camera_position_follows_rotation() {
        let config = CameraConfig::default();
        let mut camera = CameraState::new(&config, Viewport::new(1920, 1080));
        let expected = Vector3::new(4.0, 3.0, 3.0).rotate_y(20.0f32.to_radians());
        assert_close(camera.position().x, expected.x, 1e-5);
        assert_close(camera.position().z, expected.z, 1e-5);
        assert_eq!(camera.position().y, 3.0);

        camera.rotate_left();
        assert_eq!(camera.rotation_y(), 30.0);
        camera.rotate_right();
        camera.rotate_right();
        assert_eq!(camera.rotation_y(), 10.0);

        let eye_in_view = Vector4::from_point(camera.position()).mul(camera.view());
        assert_close(eye_in_view.xyz().length(), 0.0, 1e-5);
    }

    #[test]
    fn test_camera_resize_updates_aspect() {
        let mut camera = CameraState::new(&CameraConfig::default(), Viewport::new(1920, 1080));
        let wide = camera.projection().m00;
        camera.resize(Viewport::new(1080, 1080));
        assert!(camera.projection().m00 > wide);
        assert_eq!(camera.projection().m11, camera.projection().m00);
    }

    #[test]
    fn test_session_keys_act_on_release() {
        let mut session = Session::new(Config::default()).unwrap();
        assert!(!session.on_key(CameraKey::RotateLeft, KeyAction::Pressed));
        assert_eq!(session.camera.rotation_y(), 20.0);

        assert!(session.on_key(CameraKey::RotateLeft, KeyAction::Released));
        assert_eq!(session.camera.rotation_y(), 30.0);

        assert!(session.on_key(CameraKey::ToggleProjection, KeyAction::Released));
        assert_eq!(session.camera.mode(), ProjectionMode::Orthographic);
        assert!(session.on_key(CameraKey::ToggleProjection, KeyAction::Released));
        assert_eq!(session.camera.mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_session_click_in_both_projections() {
        let mut session = Session::new(Config::default()).unwrap();
        assert_eq!(session.on_mouse_click(960.0, 540.0, true), PickResult::Selected(2));
        assert_eq!(session.scene.len(), 3);

        session.on_key(CameraKey::ToggleProjection, KeyAction::Released);
        assert_eq!(session.on_mouse_click(960.0, 540.0, false), PickResult::Selected(2));
    }

    #[test]
    fn test_at_most_one_active_after_any_click() {
        let mut session = Session::new(Config::default()).unwrap();
        let mut secondary = false;
        for x in (0..=1920).step_by(240) {
            for y in (0..=1080).step_by(180) {
                session.on_mouse_click(x as f32, y as f32, secondary);
                assert!(session.scene.active_count() <= 1);
                secondary = !secondary;
            }
        }
    }

    // --- Config --------------------------------------------------------------

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let zero = Config::default().with_window_size(0, 720);
        assert!(matches!(zero.validate(), Err(Error::InvalidConfig(_))));

        let mut wide = Config::default();
        wide.camera.fov_y_degrees = 180.0;
        assert!(matches!(wide.validate(), Err(Error::InvalidConfig(_))));

        let mut depth = Config::default();
        depth.camera.near = 10.0;
        depth.camera.far = 1.0;
        assert!(matches!(depth.validate(), Err(Error::InvalidConfig(_))));

        let mut reversed = Config::default();
        reversed.camera.near = 0.0;
        reversed.camera.far = f32::INFINITY;
        assert!(matches!(reversed.validate(), Err(Error::InvalidConfig(_))));

        let bad_active = Config::default().with_cubes(vec![Vector3::ZERO], Some(4));
        assert!(matches!(bad_active.validate(), Err(Error::IndexOutOfRange { index: 4, len: 1 })));
        assert!(Session::new(bad_active).is_err());
    }

    #[test]
    fn test_infinite_depth_ranges_are_accepted() {
        let mut far_inf = Config::default();
        far_inf.camera.far = f32::INFINITY;
        let session = Session::new(far_inf).unwrap();
        assert!(session.camera.projection().is_finite());

        let mut near_inf = Config::default();
        near_inf.camera.near = f32::INFINITY;
        near_inf.camera.far = 0.1;
        let session = Session::new(near_inf).unwrap();
        assert!(session.camera.projection().is_finite());

        let mut both_inf = Config::default();
        both_inf.camera.near = f32::INFINITY;
        both_inf.camera.far = f32::INFINITY;
        assert!(matches!(both_inf.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_forward_hit_test_config() {
        let config = Config::default().with_hit_test(HitTest::Forward);
        let mut session = Session::new(config).unwrap();
        assert_eq!(session.on_mouse_click(960.0, 540.0, false), PickResult::Selected(2));
    }
}
