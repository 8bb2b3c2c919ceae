// File: crates/smith-core/src/geometry.rs
// Summary: Pixel geometry helpers: bounding boxes, the drawing disk, circles and arcs.

use std::f64::consts::TAU;

use crate::types::{Insets, PixelPoint};

/// Allowance for acos arguments that overshoot [-1, 1] by rounding only.
pub const ACOS_SLACK: f64 = 1e-12;

/// Host-provided bounding box in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Shrink by `insets` on each side.
    pub fn inset(&self, insets: &Insets) -> Self {
        Self {
            left: self.left + insets.left as f64,
            top: self.top + insets.top as f64,
            right: self.right - insets.right as f64,
            bottom: self.bottom - insets.bottom as f64,
        }
    }
}

/// Per-side label overhang reserved around the disk.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    /// Grow each side so that `pt` would fit inside `bounds`.
    pub fn include(&mut self, bounds: &Bounds, pt: PixelPoint) {
        self.left = self.left.max(bounds.left - pt.x);
        self.top = self.top.max(bounds.top - pt.y);
        self.right = self.right.max(pt.x - bounds.right);
        self.bottom = self.bottom.max(pt.y - bounds.bottom);
    }
}

/// The circular region that holds all Smith chart geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingArea {
    pub center_x: f64,
    pub center_y: f64,
    /// Diameter of the usable disk.
    pub min_dimension: f64,
}

impl DrawingArea {
    pub const fn new(center_x: f64, center_y: f64, min_dimension: f64) -> Self {
        Self { center_x, center_y, min_dimension }
    }

    /// Disk centered in `bounds` with diameter `min(width, height)`.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        let c = bounds.center();
        Self::new(c.x, c.y, bounds.width().min(bounds.height()))
    }

    /// Same center, diameter reduced by the padding on each axis.
    pub fn padded(bounds: &Bounds, padding: &Padding) -> Self {
        let c = bounds.center();
        let w = bounds.width() - padding.left - padding.right;
        let h = bounds.height() - padding.top - padding.bottom;
        Self::new(c.x, c.y, w.min(h))
    }

    #[inline]
    pub fn half(&self) -> f64 { self.min_dimension / 2.0 }

    #[inline]
    pub fn center(&self) -> PixelPoint { PixelPoint::new(self.center_x, self.center_y) }

    /// The r = 0 circle.
    pub fn boundary(&self) -> Circle {
        Circle { center: self.center(), radius: self.half() }
    }

    pub fn is_valid(&self) -> bool {
        self.center_x.is_finite() && self.center_y.is_finite()
            && self.min_dimension.is_finite() && self.min_dimension > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: PixelPoint,
    pub radius: f64,
}

impl Circle {
    pub fn point_at(&self, angle: f64) -> PixelPoint {
        PixelPoint::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// Angle, measured around `from.center`, of the intersection of `from` with
/// `other`. `upper` picks the intersection reached by rotating positively
/// from the line of centers, the other one is mirrored.
///
/// Returns `None` when the centers coincide or the circles do not meet.
pub fn clip_angle(from: &Circle, other: &Circle, upper: bool) -> Option<f64> {
    let dx = other.center.x - from.center.x;
    let dy = other.center.y - from.center.y;
    let d2 = dx * dx + dy * dy;
    if d2 == 0.0 || !d2.is_finite() {
        return None;
    }
    let bearing = dy.atan2(dx);
    let mut arg = (from.radius * from.radius - other.radius * other.radius) / d2;
    if !arg.is_finite() || arg.abs() > 1.0 + ACOS_SLACK {
        return None;
    }
    arg = arg.clamp(-1.0, 1.0);
    let half_arc = 0.5 * arg.acos();
    Some(if upper { bearing + half_arc } else { bearing - half_arc })
}

/// Arc description with HTML-canvas `arc()` semantics (y axis pointing down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub center: PixelPoint,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
    pub counterclockwise: bool,
}

impl ArcSpec {
    pub fn full_circle(circle: &Circle) -> Self {
        Self { center: circle.center, radius: circle.radius, start: 0.0, end: TAU, counterclockwise: false }
    }

    /// Signed sweep in radians; positive is clockwise on screen.
    pub fn sweep(&self) -> f64 {
        let delta = self.end - self.start;
        if self.counterclockwise {
            if -delta >= TAU { -TAU } else { -(-delta).rem_euclid(TAU) }
        } else if delta >= TAU {
            TAU
        } else {
            delta.rem_euclid(TAU)
        }
    }

    pub fn start_point(&self) -> PixelPoint {
        Circle { center: self.center, radius: self.radius }.point_at(self.start)
    }

    pub fn end_point(&self) -> PixelPoint {
        Circle { center: self.center, radius: self.radius }.point_at(self.start + self.sweep())
    }
}
