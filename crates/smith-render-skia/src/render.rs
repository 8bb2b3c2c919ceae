// File: crates/smith-render-skia/src/render.rs
// Summary: Headless rendering of a Smith chart to PNG or RGBA using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::debug;

use smith_core::{Bounds, Insets, SmithChart};

use crate::surface::SkiaSurface;

pub const WIDTH: i32 = 600;
pub const HEIGHT: i32 = 600;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::WHITE,
        }
    }
}

impl RenderOptions {
    /// Chart area inside the insets.
    pub fn chart_bounds(&self) -> Bounds {
        Bounds::from_ltwh(0.0, 0.0, self.width as f64, self.height as f64).inset(&self.insets)
    }
}

fn render_surface(chart: &mut SmithChart, opts: &RenderOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.background);
        let mut target = SkiaSurface::new(canvas);
        chart
            .render(opts.chart_bounds(), &mut target)
            .context("laying out smith chart")?;
    }
    debug!(width = opts.width, height = opts.height, datasets = chart.datasets.len(), "rendered chart");
    Ok(surface)
}

/// Render to an in-memory PNG.
pub fn render_to_png_bytes(chart: &mut SmithChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render and write a PNG to `output_png_path`, creating parent directories.
pub fn render_to_png(chart: &mut SmithChart, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render to unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(chart: &mut SmithChart, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(chart, opts)?;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut px = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
        return Err(anyhow!("reading back surface pixels failed"));
    }
    Ok((px, opts.width as u32, opts.height as u32, stride))
}
