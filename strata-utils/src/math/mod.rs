//! Math utilities for world generation.
//!
//! The floor helper returns mathematically correct results for negative
//! inputs, which plain `as i64` truncation does not.

mod vector2;

pub use vector2::Vector2;

/// Floor function returning `i64`.
///
/// A bare cast truncates toward zero, so `-0.5 as i64` would give `0`;
/// this corrects the result down by one in that case.
#[inline]
#[must_use]
pub fn lfloor(value: f64) -> i64 {
    let floored = value as i64;
    if value < floored as f64 {
        floored - 1
    } else {
        floored
    }
}

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}
