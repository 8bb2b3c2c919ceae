// File: crates/smith-core/src/controller.rs
// Summary: Smith series controller: places complex samples through the scale and
// delegates interpolation to the generic line behaviour.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::line::{LineController, PointModel};
use crate::surface::{StrokeStyle, Surface};
use crate::transform::PointTransform;
use crate::types::{ComplexPoint, PixelPoint, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetStyle {
    pub border_color: Rgba,
    pub border_width: f64,
    /// Bezier tension; 0 draws straight segments.
    pub tension: f64,
    pub show_line: bool,
    pub point_radius: f64,
    pub point_color: Rgba,
    pub point_hit_radius: f64,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            border_color: Rgba::from_argb(26, 0, 0, 0),
            border_width: 3.0,
            tension: 0.4,
            show_line: true,
            point_radius: 3.0,
            point_color: Rgba::from_argb(26, 0, 0, 0),
            point_hit_radius: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<ComplexPoint>,
    pub style: DatasetStyle,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<ComplexPoint>) -> Self {
        Self { label: label.into(), data, style: DatasetStyle::default() }
    }

    pub fn with_style(mut self, style: DatasetStyle) -> Self {
        self.style = style;
        self
    }
}

/// Tooltip body formatter: `(dataset, point index) -> text`.
#[derive(Clone)]
pub struct TooltipFormatter(Arc<dyn Fn(&Dataset, usize) -> String + Send + Sync>);

impl TooltipFormatter {
    pub fn new(f: impl Fn(&Dataset, usize) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, dataset: &Dataset, index: usize) -> Option<String> {
        dataset.data.get(index)?;
        Some((self.0)(dataset, index))
    }
}

impl Default for TooltipFormatter {
    /// `"<label>: <real> + <imag>i"`.
    fn default() -> Self {
        Self::new(|ds, i| {
            let d = ds.data[i];
            format!("{}: {} + {}i", ds.label, d.real, d.imag)
        })
    }
}

impl fmt::Debug for TooltipFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipFormatter(..)")
    }
}

/// Controller for one dataset. Holds the scale's transform and a line
/// behaviour instead of specialising either.
pub struct SmithController<'a> {
    transform: &'a dyn PointTransform,
    dataset: &'a Dataset,
    line: LineController,
}

impl<'a> SmithController<'a> {
    pub fn new(transform: &'a dyn PointTransform, dataset: &'a Dataset) -> Self {
        Self { transform, dataset, line: LineController::new(dataset.style.tension) }
    }

    /// One view model per sample; samples outside the chart domain are skipped.
    pub fn update(&self) -> Vec<PointModel> {
        let style = &self.dataset.style;
        let mut points: Vec<PointModel> = self
            .dataset
            .data
            .iter()
            .enumerate()
            .map(|(index, &sample)| match self.transform.to_pixel(sample) {
                Ok(pos) if pos.x.is_finite() && pos.y.is_finite() => {
                    PointModel::new(pos, style.point_radius, style.point_hit_radius)
                }
                Ok(_) => PointModel::skipped(style.point_radius, style.point_hit_radius),
                Err(e) => {
                    if e.is_domain() {
                        debug!(dataset = %self.dataset.label, index, error = %e, "skipping unplottable sample");
                    } else {
                        warn!(dataset = %self.dataset.label, index, error = %e, "cannot place sample");
                    }
                    PointModel::skipped(style.point_radius, style.point_hit_radius)
                }
            })
            .collect();
        self.line.update_control_points(&mut points);
        points
    }

    pub fn draw(&self, points: &[PointModel], surface: &mut dyn Surface) {
        let style = &self.dataset.style;
        if style.show_line {
            let path = self.line.path(points);
            if path.len() > 1 {
                surface.stroke_path(&path, &StrokeStyle { color: style.border_color, width: style.border_width });
            }
        }
        if style.point_radius > 0.0 {
            for p in points.iter().filter(|p| !p.skip) {
                surface.fill_circle(p.position, p.radius, style.point_color);
            }
        }
    }

    /// Index of the closest point whose hit area contains `pixel`.
    pub fn hit_test(points: &[PointModel], pixel: PixelPoint) -> Option<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.in_range(pixel))
            .min_by(|(_, a), (_, b)| a.position.distance(pixel).total_cmp(&b.position.distance(pixel)))
            .map(|(i, _)| i)
    }

    pub fn tooltip_label(&self, index: usize, formatter: &TooltipFormatter) -> Option<String> {
        formatter.format(self.dataset, index)
    }
}
