// File: crates/smith-render-skia/src/text.rs
// Summary: Tick label shaping with Skia textlayout; measures and paints rotated runs.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use smith_core::surface::TextAlign;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica Neue", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Paint `text` in the current canvas frame, vertically centered on `y`
    /// and aligned horizontally on `x`.
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        align: TextAlign,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w / 2.0,
            TextAlign::Right => x - w,
        };
        // paragraphs paint from their top-left corner
        let top = y - p.height() / 2.0;
        p.paint(canvas, (left, top));
    }
}
