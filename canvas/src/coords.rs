//! Pointer to grid coordinate mapping.
//!
//! The canvas element is usually displayed at a different size than its
//! internal bitmap (CSS scaling). Clicks arrive in viewport CSS pixels and
//! must be mapped into bitmap pixels, which are the solver's grid cells.

use protocol::Point;

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

/// A pointer position in viewport CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Displayed bounding box of the canvas element, in viewport CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Internal bitmap size of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Map a pointer position to grid space.
///
/// `round((pointer - rect.origin) * internal / displayed)` per axis. Rounding
/// is to nearest, ties away from zero. A collapsed rect (zero or negative
/// displayed size) maps at 1:1.
#[must_use]
pub fn to_grid(pointer: ScreenPoint, rect: CanvasRect, resolution: Resolution) -> Point {
    Point::new(
        scale_axis(pointer.x - rect.left, resolution.width, rect.width),
        scale_axis(pointer.y - rect.top, resolution.height, rect.height),
    )
}

#[allow(clippy::cast_possible_truncation)]
fn scale_axis(offset: f64, internal: u32, displayed: f64) -> i32 {
    let scaled = if displayed > 0.0 { offset * f64::from(internal) / displayed } else { offset };
    let rounded = scaled.round();
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
