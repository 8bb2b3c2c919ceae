// File: crates/smith-core/src/options.rs
// Summary: Scale configuration (display toggles, grid stroke, tick labels).
// Notes:
// - Deserializable from TOML; every section falls back to its defaults.
// - Label formatters are code-only and keep their defaults when loaded from a file.

use serde::{Deserialize, Serialize};

use crate::ticks::{TickFormatter, TickSet};
use crate::types::Rgba;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SmithOptions {
    pub display: bool,
    pub grid_lines: GridLineOptions,
    pub ticks: TickOptions,
}

impl Default for SmithOptions {
    fn default() -> Self {
        Self { display: true, grid_lines: GridLineOptions::default(), ticks: TickOptions::default() }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLineOptions {
    pub display: bool,
    pub color: Rgba,
    pub line_width: f64,
}

impl Default for GridLineOptions {
    fn default() -> Self {
        Self { display: true, color: Rgba::from_argb(26, 0, 0, 0), line_width: 1.0 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TickOptions {
    pub display: bool,
    /// Gap between a reactance label and the chart edge, in pixels.
    pub padding: f64,
    pub font_size: f64,
    pub font_color: Rgba,
    #[serde(flatten)]
    pub values: TickSet,
    #[serde(skip, default = "TickFormatter::resistance")]
    pub r_callback: TickFormatter,
    #[serde(skip, default = "TickFormatter::reactance")]
    pub x_callback: TickFormatter,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            display: true,
            padding: 5.0,
            font_size: 12.0,
            font_color: Rgba::opaque(0x66, 0x66, 0x66),
            values: TickSet::default(),
            r_callback: TickFormatter::resistance(),
            x_callback: TickFormatter::reactance(),
        }
    }
}
