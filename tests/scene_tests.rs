use glam::Vec3;
use std::f32::consts::PI;

use monkey_viewer::camera::{OrbitCamera, MAX_DISTANCE, MIN_DISTANCE};
use monkey_viewer::config::ViewerConfig;
use monkey_viewer::core::Fade;
use monkey_viewer::loaders::MeshAsset;
use monkey_viewer::ViewportScene;
use std::sync::Arc;

#[cfg(test)]
mod fade_tests {
    use super::*;

    #[test]
    fn test_opacity_zero_until_ready() {
        let mut scene = ViewportScene::new(&ViewerConfig::default(), Some(Arc::new(MeshAsset::default())));
        for _ in 0..30 {
            scene.tick(0.016);
            assert_eq!(scene.opacity(), 0.0);
        }
    }

    #[test]
    fn test_opacity_midpoint_is_half() {
        let mut fade = Fade::new(1.0);
        fade.start();
        fade.tick(0.5);
        assert!((fade.opacity() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_easing_is_slow_at_the_ends() {
        let mut fade = Fade::new(1.0);
        fade.start();
        fade.tick(0.1);
        assert!(fade.opacity() < 0.1);

        fade.tick(0.8);
        assert!(fade.opacity() > 0.9);
    }

    #[test]
    fn test_configured_duration_is_honored() {
        let config = ViewerConfig {
            fade_duration: 2.0,
            ..ViewerConfig::default()
        };
        let mut scene = ViewportScene::new(&config, None);
        scene.mark_created();

        scene.tick(1.0);
        assert!((scene.opacity() - 0.5).abs() < 1e-4);
        scene.tick(1.0);
        assert_eq!(scene.opacity(), 1.0);
    }

    #[test]
    fn test_zero_duration_shows_immediately() {
        let mut fade = Fade::new(0.0);
        fade.start();
        assert!(fade.is_complete());
        assert_eq!(fade.opacity(), 1.0);

        assert!(fade.tick(0.016));
        assert!(!fade.tick(0.016));
    }
}

#[cfg(test)]
mod camera_tests {
    use super::*;

    #[test]
    fn test_default_camera_matches_canvas() {
        let camera = ViewportScene::new(&ViewerConfig::default(), None).camera().clone();

        assert!((camera.position() - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-4);
        assert!((camera.fov_y - 75f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_polar_angle_stays_off_the_poles() {
        let mut camera = OrbitCamera::default();

        camera.rotate(0.0, 1.0e6, 720.0);
        assert!(camera.polar > 0.0);
        assert!(camera.position().x.is_finite());

        camera.rotate(0.0, -1.0e6, 720.0);
        assert!(camera.polar < PI);
    }

    #[test]
    fn test_zoom_distance_is_clamped() {
        let mut camera = OrbitCamera::default();

        camera.zoom(1.0e4);
        assert_eq!(camera.distance, MIN_DISTANCE);

        camera.zoom(-1.0e4);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_pan_moves_target_and_keeps_distance() {
        let mut camera = OrbitCamera::default();
        camera.pan(100.0, 0.0, 720.0);

        assert!(camera.target.x < 0.0);
        assert!((camera.position() - camera.target).length() - camera.distance < 1e-4);
    }
}
