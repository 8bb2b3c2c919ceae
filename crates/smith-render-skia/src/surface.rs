// File: crates/smith-render-skia/src/surface.rs
// Summary: `Surface` implementation over a Skia canvas.

use skia_safe as skia;

use smith_core::surface::{PathSegment, StrokeStyle, TextMeasure, TextRun};
use smith_core::{ArcSpec, PixelPoint, Rgba, Surface};

use crate::text::TextShaper;

pub(crate) fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: PixelPoint) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn stroke_paint(style: &StrokeStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.width as f32);
    paint.set_color(to_color(style.color));
    paint
}

/// Draws core primitives onto a borrowed canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    text: TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, text: TextShaper::new() }
    }
}

impl TextMeasure for SkiaSurface<'_> {
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        self.text.measure_width(text, font_size as f32) as f64
    }
}

impl Surface for SkiaSurface<'_> {
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, style: &StrokeStyle) {
        self.canvas.draw_line(pt(from), pt(to), &stroke_paint(style));
    }

    fn stroke_arc(&mut self, arc: &ArcSpec, style: &StrokeStyle) {
        let (cx, cy, r) = (arc.center.x as f32, arc.center.y as f32, arc.radius as f32);
        let oval = skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r);
        // skia angles are degrees, clockwise on screen like ours
        self.canvas.draw_arc(
            oval,
            arc.start.to_degrees() as f32,
            arc.sweep().to_degrees() as f32,
            false,
            &stroke_paint(style),
        );
    }

    fn stroke_path(&mut self, path: &[PathSegment], style: &StrokeStyle) {
        let mut p = skia::Path::new();
        for seg in path {
            match *seg {
                PathSegment::MoveTo(to) => {
                    p.move_to(pt(to));
                }
                PathSegment::LineTo(to) => {
                    p.line_to(pt(to));
                }
                PathSegment::CubicTo { c1, c2, to } => {
                    p.cubic_to(pt(c1), pt(c2), pt(to));
                }
            }
        }
        self.canvas.draw_path(&p, &stroke_paint(style));
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_color(color));
        self.canvas.draw_circle(pt(center), radius as f32, &paint);
    }

    fn fill_text(&mut self, run: &TextRun) {
        self.canvas.save();
        self.canvas.translate(pt(run.anchor));
        self.canvas.rotate(run.rotation.to_degrees() as f32, None);
        self.text.draw_aligned(
            self.canvas,
            &run.text,
            (run.offset as f32, 0.0),
            run.align,
            run.font_size as f32,
            to_color(run.color),
        );
        self.canvas.restore();
    }
}
