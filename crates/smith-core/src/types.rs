// File: crates/smith-core/src/types.rs
// Summary: Shared value types (complex samples, pixel points, insets, colors).

use serde::{Deserialize, Serialize};

/// A normalized impedance sample: resistance `real`, reactance `imag`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexPoint {
    pub real: f64,
    pub imag: f64,
}

impl ComplexPoint {
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: PixelPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(16)
    }
}

/// Straight RGBA color, backend-neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}
