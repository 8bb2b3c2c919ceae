// File: crates/smith-core/src/line.rs
// Summary: Generic line-series behaviour: point view models, Bezier control points, paths.

use crate::surface::PathSegment;
use crate::types::PixelPoint;

/// Resolved view model for one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointModel {
    pub position: PixelPoint,
    /// Unplottable; breaks the line.
    pub skip: bool,
    pub radius: f64,
    pub hit_radius: f64,
    pub control_prev: PixelPoint,
    pub control_next: PixelPoint,
}

impl PointModel {
    pub fn new(position: PixelPoint, radius: f64, hit_radius: f64) -> Self {
        Self { position, skip: false, radius, hit_radius, control_prev: position, control_next: position }
    }

    pub fn skipped(radius: f64, hit_radius: f64) -> Self {
        let nan = PixelPoint::new(f64::NAN, f64::NAN);
        Self { skip: true, ..Self::new(nan, radius, hit_radius) }
    }

    /// True when `pixel` lies within the marker plus its hit slack.
    pub fn in_range(&self, pixel: PixelPoint) -> bool {
        !self.skip && self.position.distance(pixel) <= self.radius + self.hit_radius
    }
}

/// Control points around `cur`, scaled by the neighbouring segment lengths.
pub fn spline_control_points(prev: PixelPoint, cur: PixelPoint, next: PixelPoint, tension: f64) -> (PixelPoint, PixelPoint) {
    let d01 = prev.distance(cur);
    let d12 = cur.distance(next);
    let mut s01 = d01 / (d01 + d12);
    let mut s12 = d12 / (d01 + d12);
    if s01.is_nan() { s01 = 0.0; }
    if s12.is_nan() { s12 = 0.0; }
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - prev.x;
    let dy = next.y - prev.y;
    (
        PixelPoint::new(cur.x - fa * dx, cur.y - fa * dy),
        PixelPoint::new(cur.x + fb * dx, cur.y + fb * dy),
    )
}

/// Line interpolation shared by any series drawn as a polyline or spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineController {
    pub tension: f64,
}

impl Default for LineController {
    fn default() -> Self {
        Self { tension: 0.4 }
    }
}

impl LineController {
    pub fn new(tension: f64) -> Self {
        Self { tension }
    }

    /// Fill in control points. Each unbroken run of points is treated on its own.
    pub fn update_control_points(&self, points: &mut [PointModel]) {
        for run in points.split_mut(|p| p.skip) {
            let n = run.len();
            for i in 0..n {
                let cur = run[i].position;
                let prev = if i > 0 { run[i - 1].position } else { cur };
                let next = if i + 1 < n { run[i + 1].position } else { cur };
                let (cp, cn) = spline_control_points(prev, cur, next, self.tension);
                run[i].control_prev = cp;
                run[i].control_next = cn;
            }
        }
    }

    /// Path through every non-skipped point; a skipped point starts a new subpath.
    pub fn path(&self, points: &[PointModel]) -> Vec<PathSegment> {
        let mut out = Vec::with_capacity(points.len());
        let mut last: Option<&PointModel> = None;
        for p in points {
            if p.skip {
                last = None;
                continue;
            }
            out.push(match last {
                None => PathSegment::MoveTo(p.position),
                Some(_) if self.tension == 0.0 => PathSegment::LineTo(p.position),
                Some(prev) => PathSegment::CubicTo { c1: prev.control_next, c2: p.control_prev, to: p.position },
            });
            last = Some(p);
        }
        out
    }
}
