// File: crates/smith-core/src/lib.rs
// Summary: Core library entry point; exports the Smith chart geometry, scale and controller API.

pub mod chart;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod options;
pub mod scale;
pub mod surface;
pub mod ticks;
pub mod transform;
pub mod types;

pub use chart::SmithChart;
pub use controller::{Dataset, DatasetStyle, SmithController, TooltipFormatter};
pub use error::{Result, SmithError};
pub use geometry::{ArcSpec, Bounds, DrawingArea};
pub use grid::{GridLayout, GridPrimitive, ReactanceArc, ResistanceCircle, TickLabel};
pub use options::{GridLineOptions, SmithOptions, TickOptions};
pub use scale::{Scale, SmithScale};
pub use surface::{DrawCall, Recorder, Surface, TextMeasure};
pub use ticks::{TickFormatter, TickSet};
pub use transform::{forward, inverse, PointTransform};
pub use types::{ComplexPoint, Insets, PixelPoint, Rgba};
