use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

use crate::core::{Button, Controller};

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const ROTATE_SPEED: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.95;
pub const MIN_DISTANCE: f32 = 0.1;
pub const MAX_DISTANCE: f32 = 500.0;
const POLAR_EPSILON: f32 = 1e-4;

/// Perspective camera orbiting a target point
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Angle around the vertical axis, zero looking down -Z
    pub azimuth: f32,
    /// Angle from +Y, in (0, PI)
    pub polar: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    /// Camera at `position` looking at `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let (azimuth, polar) = if offset.length_squared() > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / offset.length()).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        Self {
            target,
            distance,
            azimuth,
            polar: polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    pub fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + self.distance
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Orbit by a pointer drag of (dx, dy) pixels in a viewport `height` tall
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        let height = height.max(1.0);
        self.azimuth -= TAU * dx / height * ROTATE_SPEED;
        self.polar = (self.polar - TAU * dy / height * ROTATE_SPEED)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    /// Slide the target so the point under the cursor follows a drag
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        let height = height.max(1.0);
        let world_per_pixel = 2.0 * self.distance * (self.fov_y * 0.5).tan() / height;
        self.target += (-dx * self.right() + dy * self.up()) * world_per_pixel;
    }

    /// Positive scroll moves towards the target
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * ZOOM_STEP.powf(scroll)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Apply one frame of pointer input
    pub fn update(&mut self, controller: &dyn Controller, viewport_height: f32) {
        let (dx, dy) = controller.pointer_delta();
        let panning = controller.is_down(Button::MouseRight)
            || controller.is_down(Button::MouseMiddle)
            || (controller.is_down(Button::MouseLeft) && controller.is_down(Button::Shift));

        if panning {
            self.pan(dx, dy, viewport_height);
        } else if controller.is_down(Button::MouseLeft) {
            self.rotate(dx, dy, viewport_height);
        }

        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            self.zoom(scroll);
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    struct Drag {
        pressed: Vec<Button>,
        delta: (f32, f32),
        scroll: f32,
    }

    impl Controller for Drag {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn pointer_delta(&self) -> (f32, f32) {
            self.delta
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    #[test]
    fn default_matches_canvas_camera() {
        let camera = OrbitCamera::default();
        assert!((camera.position() - Vec3::new(0.0, 0.0, 5.0)).length() < EPS);
        assert!((camera.forward() - Vec3::NEG_Z).length() < EPS);
        assert!((camera.fov_y - 75f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn rotation_keeps_distance() {
        let mut camera = OrbitCamera::default();
        camera.rotate(120.0, 45.0, 600.0);
        assert!((camera.position().length() - 5.0).abs() < EPS);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.rotate(0.0, 10_000.0, 600.0);
        assert!(camera.polar > 0.0);
        camera.rotate(0.0, -20_000.0, 600.0);
        assert!(camera.polar < PI);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut camera = OrbitCamera::default();
        let before = camera.position() - camera.target;
        camera.pan(30.0, -10.0, 600.0);

        assert!(camera.target.length() > 0.0);
        assert!((camera.position() - camera.target - before).length() < EPS);
    }

    #[test]
    fn right_drag_pans_left_drag_orbits() {
        let mut camera = OrbitCamera::default();
        camera.update(
            &Drag { pressed: vec![Button::MouseRight], delta: (20.0, 0.0), scroll: 0.0 },
            600.0,
        );
        assert_eq!(camera.azimuth, 0.0);
        assert!(camera.target.x < 0.0);

        let mut camera = OrbitCamera::default();
        camera.update(
            &Drag { pressed: vec![Button::MouseLeft], delta: (20.0, 0.0), scroll: 1.0 },
            600.0,
        );
        assert!(camera.azimuth < 0.0);
        assert_eq!(camera.target, Vec3::ZERO);
        assert!(camera.distance < 5.0);
    }

    #[test]
    fn target_projects_to_center() {
        let camera = OrbitCamera::default();
        let clip = camera.view_proj(16.0 / 9.0) * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < EPS && ndc.y.abs() < EPS);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
