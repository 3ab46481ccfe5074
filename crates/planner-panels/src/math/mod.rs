//! Core geometry types for panel layout
//!
//! All values are viewport pixels with the origin at the top-left corner.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Round `value` to the nearest multiple of `step`.
///
/// A non-positive step leaves the value unchanged.
#[inline]
pub fn round_to_step(value: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}
