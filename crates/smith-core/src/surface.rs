// File: crates/smith-core/src/surface.rs
// Summary: Backend-agnostic drawing contract plus a call recorder for headless use.

use crate::geometry::ArcSpec;
use crate::types::{PixelPoint, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A single text label, drawn vertically centered on its baseline origin.
///
/// The surface translates to `anchor`, rotates by `rotation` radians and
/// draws the text at `(offset, 0)` with the given horizontal alignment.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub anchor: PixelPoint,
    pub rotation: f64,
    pub align: TextAlign,
    pub offset: f64,
    pub font_size: f64,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    CubicTo { c1: PixelPoint, c2: PixelPoint, to: PixelPoint },
}

pub trait TextMeasure {
    /// Rendered width of `text` in pixels.
    fn measure_text(&self, text: &str, font_size: f64) -> f64;
}

/// Drawing primitives needed by the scale and the controller.
pub trait Surface: TextMeasure {
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, style: &StrokeStyle);
    fn stroke_arc(&mut self, arc: &ArcSpec, style: &StrokeStyle);
    fn stroke_path(&mut self, path: &[PathSegment], style: &StrokeStyle);
    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Rgba);
    fn fill_text(&mut self, run: &TextRun);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Line { from: PixelPoint, to: PixelPoint, style: StrokeStyle },
    Arc { arc: ArcSpec, style: StrokeStyle },
    Path { path: Vec<PathSegment>, style: StrokeStyle },
    Circle { center: PixelPoint, radius: f64, color: Rgba },
    Text(TextRun),
}

/// Surface that records every call. Text is measured with a fixed advance
/// of `0.6 * font_size` per character.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSpec> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Arc { arc, .. } => Some(arc),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(run) => Some(run),
            _ => None,
        })
    }
}

impl TextMeasure for Recorder {
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.6
    }
}

impl Surface for Recorder {
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, style: &StrokeStyle) {
        self.calls.push(DrawCall::Line { from, to, style: *style });
    }
    fn stroke_arc(&mut self, arc: &ArcSpec, style: &StrokeStyle) {
        self.calls.push(DrawCall::Arc { arc: *arc, style: *style });
    }
    fn stroke_path(&mut self, path: &[PathSegment], style: &StrokeStyle) {
        self.calls.push(DrawCall::Path { path: path.to_vec(), style: *style });
    }
    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Rgba) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }
    fn fill_text(&mut self, run: &TextRun) {
        self.calls.push(DrawCall::Text(run.clone()));
    }
}
