// File: crates/smith-core/src/error.rs
// Summary: Error taxonomy for transforms (per-point) and layout (configuration).

use thiserror::Error;

/// Result type used throughout the core crate.
pub type Result<T> = std::result::Result<T, SmithError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmithError {
    /// The sample cannot be placed on the chart. Callers skip the point.
    #[error("point ({real}, {imag}) is outside the chart domain: {reason}")]
    Domain { real: f64, imag: f64, reason: &'static str },

    /// Ticks or dimensions are unusable. Raised at fit time.
    #[error("invalid chart configuration: {0}")]
    Configuration(String),

    /// A point transform was requested before the scale received its bounds.
    #[error("scale has not been sized yet")]
    NotSized,
}

impl SmithError {
    pub(crate) fn domain(real: f64, imag: f64, reason: &'static str) -> Self {
        Self::Domain { real, imag, reason }
    }

    /// True for per-point failures that should be skipped rather than surfaced.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
