// File: crates/smith-core/src/transform.rs
// Summary: Complex impedance <-> pixel mapping on the Smith chart disk.
//
// The forward mapping intersects two auxiliary circles: the constant
// resistance circle of `real` and the constant reactance circle of `imag`.
// The intersection that is not the shared r = inf point on the right edge is
// the plotted position. It agrees with the Moebius form Γ = (z - 1) / (z + 1).
//
// Near the real axis the reactance circle grows without bound and the
// intersection angle is lost to cancellation; there the Moebius form is used.

use crate::error::{Result, SmithError};
use crate::geometry::{clip_angle, Circle, DrawingArea};
use crate::types::{ComplexPoint, PixelPoint};

/// Above this `(1 + r) / x²` the circle intersection loses more than about
/// 1e-12 of the disk radius to rounding.
const INTERSECTION_CONDITION_LIMIT: f64 = 1e4;

/// True when the two-circle construction for `real + j·imag` is too
/// ill-conditioned to use.
pub(crate) fn near_real_axis(real: f64, imag: f64) -> bool {
    imag * imag * INTERSECTION_CONDITION_LIMIT < 1.0 + real
}

/// Γ = (z - 1) / (z + 1) scaled onto the disk. The division is scaled by
/// the larger denominator component so huge inputs do not overflow.
fn mobius(area: &DrawingArea, real: f64, imag: f64) -> PixelPoint {
    let (a, b) = (real - 1.0, imag);
    let (c, d) = (real + 1.0, imag);
    let (re, im) = if c.abs() >= d.abs() {
        let e = d / c;
        let f = c + d * e;
        ((a + b * e) / f, (b - a * e) / f)
    } else {
        let e = c / d;
        let f = d + c * e;
        ((a * e + b) / f, (b * e - a) / f)
    };
    let half = area.half();
    PixelPoint::new(area.center_x + half * re, area.center_y - half * im)
}

/// Pixel-space circle of constant resistance `r`.
pub fn resistance_circle(area: &DrawingArea, r: f64) -> Circle {
    let half = area.half();
    Circle {
        center: PixelPoint::new(area.center_x + (r / (1.0 + r)) * half, area.center_y),
        radius: half / (1.0 + r),
    }
}

/// Pixel-space circle of constant reactance `x`. Meaningless for `x == 0`.
pub fn reactance_circle(area: &DrawingArea, x: f64) -> Circle {
    let half = area.half();
    let radius = half / x.abs();
    let cy = if x > 0.0 { area.center_y - radius } else { area.center_y + radius };
    Circle { center: PixelPoint::new(area.center_x + half, cy), radius }
}

/// Map `real + j·imag` to a pixel inside `area`.
pub fn forward(area: &DrawingArea, real: f64, imag: f64) -> Result<PixelPoint> {
    if !real.is_finite() || !imag.is_finite() {
        return Err(SmithError::domain(real, imag, "non-finite component"));
    }
    if real <= -1.0 {
        return Err(SmithError::domain(real, imag, "resistance must be greater than -1"));
    }

    let r_circle = resistance_circle(area, real);
    if imag == 0.0 {
        return Ok(PixelPoint::new(r_circle.center.x - r_circle.radius, area.center_y));
    }

    if near_real_axis(real, imag) {
        return Ok(mobius(area, real, imag));
    }

    let x_circle = reactance_circle(area, imag);
    let phi = clip_angle(&x_circle, &r_circle, imag > 0.0)
        .ok_or_else(|| SmithError::domain(real, imag, "resistance and reactance circles do not intersect"))?;
    Ok(x_circle.point_at(phi))
}

/// Recover the impedance plotted at `pixel`.
pub fn inverse(area: &DrawingArea, pixel: PixelPoint) -> Result<ComplexPoint> {
    let half = area.half();
    let gr = (pixel.x - area.center_x) / half;
    let gi = (area.center_y - pixel.y) / half;
    let mag2 = gr * gr + gi * gi;
    if !mag2.is_finite() || mag2 > 1.0 + 1e-9 {
        return Err(SmithError::domain(pixel.x, pixel.y, "pixel lies outside the chart disk"));
    }
    let denom = (1.0 - gr) * (1.0 - gr) + gi * gi;
    if denom == 0.0 {
        return Err(SmithError::domain(pixel.x, pixel.y, "pixel is the infinite impedance point"));
    }
    Ok(ComplexPoint::new((1.0 - mag2) / denom, 2.0 * gi / denom))
}

/// Conversion between data space and pixel space.
pub trait PointTransform {
    fn to_pixel(&self, point: ComplexPoint) -> Result<PixelPoint>;
    fn from_pixel(&self, pixel: PixelPoint) -> Result<ComplexPoint>;
}

impl PointTransform for DrawingArea {
    fn to_pixel(&self, point: ComplexPoint) -> Result<PixelPoint> {
        forward(self, point.real, point.imag)
    }

    fn from_pixel(&self, pixel: PixelPoint) -> Result<ComplexPoint> {
        inverse(self, pixel)
    }
}
