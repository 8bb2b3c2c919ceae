// File: crates/smith-render-skia/src/lib.rs
// Summary: Skia backend for smith-core: canvas surface, text shaping and PNG output.

pub mod render;
pub mod surface;
pub mod text;

pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use surface::SkiaSurface;
pub use text::TextShaper;
