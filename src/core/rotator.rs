use std::sync::Arc;

use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f64::consts::TAU;

use crate::loaders::MeshAsset;

/// Rotation angles of the displayed mesh, in radians.
///
/// Angles accumulate without wrapping and are kept in `f64` so a single
/// frame step stays representable on long runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Orientation {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation applied about X, then Y, then Z (intrinsic)
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            wrap_angle(self.pitch),
            wrap_angle(self.yaw),
            wrap_angle(self.roll),
        )
    }
}

/// Reduce to [0, TAU) before narrowing so large angles keep their precision
fn wrap_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

/// Orientation after one frame tick.
///
/// While active, pitch decreases by `delta` and yaw and roll increase by it.
/// Inactive ticks return the input unchanged and their time is dropped.
/// Negative or non-finite deltas advance nothing.
pub fn advance(orientation: Orientation, delta: f32, active: bool) -> Orientation {
    if !active || !delta.is_finite() || delta <= 0.0 {
        return orientation;
    }

    let delta = f64::from(delta);
    Orientation {
        pitch: orientation.pitch - delta,
        yaw: orientation.yaw + delta,
        roll: orientation.roll + delta,
    }
}

/// A loaded mesh together with the orientation it is displayed at
#[derive(Debug, Clone)]
pub struct RotatingModel {
    pub asset: Arc<MeshAsset>,
    pub orientation: Orientation,
    pub scale: f32,
}

impl RotatingModel {
    pub fn new(asset: Arc<MeshAsset>, scale: f32) -> Self {
        Self {
            asset,
            orientation: Orientation::ZERO,
            scale,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation.to_quat(),
            Vec3::ZERO,
        )
    }
}

/// Spins a model once per frame tick while its start flag is set
#[derive(Debug, Clone, Default)]
pub struct ModelRotator {
    model: Option<RotatingModel>,
}

impl ModelRotator {
    pub fn new(model: Option<RotatingModel>) -> Self {
        Self { model }
    }

    /// Rotator with nothing to spin; every tick is a no-op
    pub fn empty() -> Self {
        Self { model: None }
    }

    pub fn with_asset(asset: Arc<MeshAsset>, scale: f32) -> Self {
        Self::new(Some(RotatingModel::new(asset, scale)))
    }

    /// Apply one tick. Without a model this does nothing.
    pub fn on_frame(&mut self, delta: f32, start: bool) {
        if let Some(model) = self.model.as_mut() {
            model.orientation = advance(model.orientation, delta, start);
        }
    }

    pub fn model(&self) -> Option<&RotatingModel> {
        self.model.as_ref()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.model.as_ref().map(|m| m.orientation)
    }
}
