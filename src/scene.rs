use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::sync::Arc;

use crate::camera::OrbitCamera;
use crate::config::ViewerConfig;
use crate::core::{Fade, ModelRotator, Orientation, ReadinessLatch};
use crate::loaders::MeshAsset;
use crate::types::SceneUniform;

/// Directional light shining from `position` towards the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub position: [f32; 3],
    pub intensity: f32,
    #[serde(default = "white")]
    pub color: [f32; 3],
}

impl DirectionalLight {
    /// Unit vector from the lit surface towards the light
    pub fn direction(&self) -> Vec3 {
        Vec3::from_array(self.position).normalize_or_zero()
    }
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Ambient plus two directional lights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_intensity: PI / 3.0,
            key: DirectionalLight {
                position: [5.0, 5.0, 5.0],
                intensity: PI,
                color: white(),
            },
            fill: DirectionalLight {
                position: [-5.0, -5.0, -5.0],
                intensity: PI / 2.0,
                color: white(),
            },
        }
    }
}

/// Camera, lights and one model, gated by a readiness latch.
///
/// The scene starts hidden and still. `mark_created` is called by the
/// owner of the render loop once the first frame is on screen; from then
/// on the fade runs and the model spins.
#[derive(Debug, Clone)]
pub struct ViewportScene {
    camera: OrbitCamera,
    lighting: Lighting,
    background: [f32; 3],
    readiness: ReadinessLatch,
    fade: Fade,
    rotator: ModelRotator,
}

impl ViewportScene {
    pub fn new(config: &ViewerConfig, model: Option<Arc<MeshAsset>>) -> Self {
        let rotator = match model {
            Some(asset) => ModelRotator::with_asset(asset, config.model_scale),
            None => ModelRotator::empty(),
        };

        Self {
            camera: OrbitCamera::default(),
            lighting: config.lighting,
            background: config.background,
            readiness: ReadinessLatch::new(),
            fade: Fade::new(config.fade_duration),
            rotator,
        }
    }

    /// First-frame hook. Only the first call has an effect; it returns
    /// whether this call made the scene ready.
    pub fn mark_created(&mut self) -> bool {
        if !self.readiness.fire() {
            return false;
        }
        log::info!(
            "Scene ready, starting {:.2}s fade-in",
            self.fade.duration()
        );
        self.fade.start();
        true
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    /// One frame tick of `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        let ready = self.readiness.is_ready();
        if self.fade.tick(delta) {
            log::debug!("Fade-in complete");
        }
        self.rotator.on_frame(delta, ready);
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.rotator.orientation()
    }

    pub fn model(&self) -> Option<&Arc<MeshAsset>> {
        self.rotator.model().map(|m| &m.asset)
    }

    /// Identity when there is no model
    pub fn model_matrix(&self) -> Mat4 {
        self.rotator
            .model()
            .map(|m| m.model_matrix())
            .unwrap_or(Mat4::IDENTITY)
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    /// GPU uniform block for the current frame
    pub fn uniform(&self, aspect: f32) -> SceneUniform {
        let model = self.model_matrix();
        let lights = [self.lighting.key, self.lighting.fill];

        let mut uniform = SceneUniform {
            model: model.to_cols_array_2d(),
            normal_matrix: SceneUniform::normal_matrix_for(model),
            opacity: self.opacity(),
            background: self.background_rgba(),
            ambient: [1.0, 1.0, 1.0, self.lighting.ambient_intensity],
            light_dirs: lights.map(|l| l.direction().extend(l.intensity).to_array()),
            light_colors: lights.map(|l| [l.color[0], l.color[1], l.color[2], 1.0]),
            ..SceneUniform::default()
        };
        uniform.camera(self.camera.view_proj(aspect), self.camera.position());
        uniform
    }

    fn background_rgba(&self) -> [f32; 4] {
        [self.background[0], self.background[1], self.background[2], 1.0]
    }
}
