mod aabb;
mod easing;

pub use aabb::AABB;
pub use easing::{ease_in_out, CubicBezier, EASE_IN_OUT};
