// File: crates/smith-core/src/scale.rs
// Summary: Scale lifecycle contract and the Smith scale that implements it.

use crate::controller::Dataset;
use crate::error::{Result, SmithError};
use crate::geometry::{Bounds, DrawingArea, Padding};
use crate::grid::{self, GridLayout};
use crate::options::SmithOptions;
use crate::surface::{Surface, TextMeasure};
use crate::ticks::TickSet;
use crate::transform::{forward, inverse, PointTransform};
use crate::types::{ComplexPoint, PixelPoint};

/// Layout/draw hooks invoked by a chart, in declaration order.
pub trait Scale {
    fn set_dimensions(&mut self, bounds: Bounds);
    /// Linear tick values for the host; a scale with its own tick model returns none.
    fn build_ticks(&mut self) -> Vec<f64>;
    fn convert_ticks_to_labels(&mut self);
    fn fit(&mut self, measure: &dyn TextMeasure) -> Result<()>;
    fn draw(&self, surface: &mut dyn Surface);

    /// Run the four layout hooks for new bounds.
    fn update(&mut self, bounds: Bounds, measure: &dyn TextMeasure) -> Result<()> {
        self.set_dimensions(bounds);
        self.build_ticks();
        self.convert_ticks_to_labels();
        self.fit(measure)
    }
}

/// Layout progress of a [`SmithScale`].
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutState {
    Unsized,
    Sized { bounds: Bounds, area: DrawingArea },
    Fitted { bounds: Bounds, layout: GridLayout },
}

#[derive(Clone, Debug)]
pub struct SmithScale {
    pub options: SmithOptions,
    r_ticks: Vec<f64>,
    x_ticks: Vec<f64>,
    r_labels: Vec<String>,
    x_labels: Vec<String>,
    state: LayoutState,
}

impl SmithScale {
    pub fn new(options: SmithOptions) -> Self {
        Self {
            options,
            r_ticks: Vec::new(),
            x_ticks: Vec::new(),
            r_labels: Vec::new(),
            x_labels: Vec::new(),
            state: LayoutState::Unsized,
        }
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Fitted grid, if the last layout pass completed.
    pub fn layout(&self) -> Option<&GridLayout> {
        match &self.state {
            LayoutState::Fitted { layout, .. } => Some(layout),
            _ => None,
        }
    }

    /// Current disk; available from `set_dimensions` on.
    pub fn drawing_area(&self) -> Option<DrawingArea> {
        match &self.state {
            LayoutState::Unsized => None,
            LayoutState::Sized { area, .. } => Some(*area),
            LayoutState::Fitted { layout, .. } => Some(layout.area),
        }
    }

    pub fn padding(&self) -> Padding {
        self.layout().map(|l| l.padding).unwrap_or_default()
    }

    pub fn resistance_labels(&self) -> &[String] {
        &self.r_labels
    }

    pub fn reactance_labels(&self) -> &[String] {
        &self.x_labels
    }

    /// Pixel position of `real + j·imag` on the current disk.
    pub fn get_point_position(&self, real: f64, imag: f64) -> Result<PixelPoint> {
        let area = self.drawing_area().ok_or(SmithError::NotSized)?;
        forward(&area, real, imag)
    }

    /// Default tooltip text for one sample: `"<real> + <imag>i"`.
    pub fn get_label_for_index(&self, datasets: &[Dataset], index: usize, dataset_index: usize) -> Option<String> {
        let d = datasets.get(dataset_index)?.data.get(index)?;
        Some(format!("{} + {}i", d.real, d.imag))
    }
}

impl Default for SmithScale {
    fn default() -> Self {
        Self::new(SmithOptions::default())
    }
}

impl Scale for SmithScale {
    fn set_dimensions(&mut self, bounds: Bounds) {
        let area = DrawingArea::new(
            bounds.left + (bounds.width() / 2.0).round(),
            bounds.top + (bounds.height() / 2.0).round(),
            bounds.width().min(bounds.height()),
        );
        self.state = LayoutState::Sized { bounds, area };
    }

    fn build_ticks(&mut self) -> Vec<f64> {
        self.r_ticks = self.options.ticks.values.resistance.clone();
        self.x_ticks = self.options.ticks.values.reactance.clone();
        Vec::new()
    }

    fn convert_ticks_to_labels(&mut self) {
        self.r_labels = self.options.ticks.r_callback.format_all(&self.r_ticks);
        self.x_labels = self.options.ticks.x_callback.format_all(&self.x_ticks);
    }

    fn fit(&mut self, measure: &dyn TextMeasure) -> Result<()> {
        let bounds = match &self.state {
            LayoutState::Unsized => return Err(SmithError::NotSized),
            LayoutState::Sized { bounds, .. } | LayoutState::Fitted { bounds, .. } => *bounds,
        };
        let ticks = TickSet { resistance: self.r_ticks.clone(), reactance: self.x_ticks.clone() };
        match grid::fit(&bounds, &ticks, &self.r_labels, &self.x_labels, &self.options, measure) {
            Ok(layout) => {
                self.state = LayoutState::Fitted { bounds, layout };
                Ok(())
            }
            Err(e) => {
                // a stale grid must not be drawn for the new bounds
                self.state = LayoutState::Sized { bounds, area: DrawingArea::from_bounds(&bounds) };
                Err(e)
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if let Some(layout) = self.layout() {
            grid::draw(layout, &self.options, surface);
        }
    }
}

impl PointTransform for SmithScale {
    fn to_pixel(&self, point: ComplexPoint) -> Result<PixelPoint> {
        self.get_point_position(point.real, point.imag)
    }

    fn from_pixel(&self, pixel: PixelPoint) -> Result<ComplexPoint> {
        let area = self.drawing_area().ok_or(SmithError::NotSized)?;
        inverse(&area, pixel)
    }
}
