pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod loaders;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod types;

pub use crate::core::{advance, ModelRotator, Orientation, ReadinessLatch};
pub use crate::scene::ViewportScene;
