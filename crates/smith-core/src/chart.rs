// File: crates/smith-core/src/chart.rs
// Summary: Chart struct tying one Smith scale to its datasets; runs layout and draw on a surface.

use tracing::debug;

use crate::controller::{Dataset, SmithController, TooltipFormatter};
use crate::error::Result;
use crate::geometry::Bounds;
use crate::line::PointModel;
use crate::options::SmithOptions;
use crate::scale::{Scale, SmithScale};
use crate::surface::Surface;
use crate::types::PixelPoint;

pub struct SmithChart {
    pub scale: SmithScale,
    pub datasets: Vec<Dataset>,
    pub tooltip: TooltipFormatter,
    // point models from the last render, one list per dataset
    models: Vec<Vec<PointModel>>,
}

impl SmithChart {
    pub fn new(options: SmithOptions) -> Self {
        Self {
            scale: SmithScale::new(options),
            datasets: Vec::new(),
            tooltip: TooltipFormatter::default(),
            models: Vec::new(),
        }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    /// Lay out the scale for `bounds`, then draw grid and series.
    pub fn render<S: Surface>(&mut self, bounds: Bounds, surface: &mut S) -> Result<()> {
        // models from a previous layout must not outlive a failed one
        self.models.clear();
        self.scale.update(bounds, &*surface)?;
        self.scale.draw(surface);

        for ds in &self.datasets {
            let ctrl = SmithController::new(&self.scale, ds);
            let points = ctrl.update();
            ctrl.draw(&points, surface);
            debug!(dataset = %ds.label, points = points.len(), skipped = points.iter().filter(|p| p.skip).count(), "drew dataset");
            self.models.push(points);
        }
        Ok(())
    }

    /// View models of `dataset_index` from the last render.
    pub fn point_models(&self, dataset_index: usize) -> Option<&[PointModel]> {
        self.models.get(dataset_index).map(Vec::as_slice)
    }

    /// `(dataset_index, index)` of the point under `pixel`, closest first.
    pub fn hover(&self, pixel: PixelPoint) -> Option<(usize, usize)> {
        self.models
            .iter()
            .enumerate()
            .filter_map(|(di, pts)| {
                SmithController::hit_test(pts, pixel).map(|i| (di, i, pts[i].position.distance(pixel)))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(di, i, _)| (di, i))
    }

    pub fn tooltip(&self, dataset_index: usize, index: usize) -> Option<String> {
        let ds = self.datasets.get(dataset_index)?;
        SmithController::new(&self.scale, ds).tooltip_label(index, &self.tooltip)
    }

    /// Scale-level label for a sample, `"<real> + <imag>i"`.
    pub fn label_for_index(&self, index: usize, dataset_index: usize) -> Option<String> {
        self.scale.get_label_for_index(&self.datasets, index, dataset_index)
    }
}

impl Default for SmithChart {
    fn default() -> Self {
        Self::new(SmithOptions::default())
    }
}
