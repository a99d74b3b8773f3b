pub mod clock;
pub mod controller;
pub mod fade;
pub mod frame;
pub mod gpu_context;
pub mod input_adapter;
pub mod readiness;
pub mod rotator;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use fade::Fade;
pub use frame::{FrameCounter, FrameInfo};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use readiness::ReadinessLatch;
pub use rotator::{advance, ModelRotator, Orientation, RotatingModel};
