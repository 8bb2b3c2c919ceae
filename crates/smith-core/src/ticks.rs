// File: crates/smith-core/src/ticks.rs
// Summary: Resistance/reactance tick lists, validation and label formatting.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmithError};

pub const DEFAULT_RESISTANCE_TICKS: [f64; 22] = [
    0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 3.0, 4.0, 5.0,
    10.0, 20.0, 50.0,
];

pub const DEFAULT_REACTANCE_TICKS: [f64; 25] = [
    -50.0, -20.0, -10.0, -5.0, -4.0, -3.0, -2.0, -1.0, -0.8, -0.6, -0.4, -0.2, 0.0, 0.2, 0.4, 0.6,
    0.8, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 20.0, 50.0,
];

/// Ordered tick values. Order is draw order and label order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSet {
    pub resistance: Vec<f64>,
    pub reactance: Vec<f64>,
}

impl Default for TickSet {
    fn default() -> Self {
        Self {
            resistance: DEFAULT_RESISTANCE_TICKS.to_vec(),
            reactance: DEFAULT_REACTANCE_TICKS.to_vec(),
        }
    }
}

impl TickSet {
    /// Reject non-finite values, negative resistances and duplicates.
    pub fn validate(&self) -> Result<()> {
        check_list("resistance", &self.resistance, |v| v >= 0.0)?;
        check_list("reactance", &self.reactance, |_| true)
    }
}

fn check_list(kind: &str, ticks: &[f64], in_range: impl Fn(f64) -> bool) -> Result<()> {
    for (i, &v) in ticks.iter().enumerate() {
        if !v.is_finite() {
            return Err(SmithError::Configuration(format!("{kind} tick #{i} is not finite ({v})")));
        }
        if !in_range(v) {
            return Err(SmithError::Configuration(format!("{kind} tick #{i} is out of range ({v})")));
        }
        // -0.0 == 0.0 counts as a duplicate too
        if ticks[..i].iter().any(|&w| w == v) {
            return Err(SmithError::Configuration(format!("duplicate {kind} tick {v}")));
        }
    }
    Ok(())
}

/// Tick label formatter: `(value, index, all ticks) -> label`.
#[derive(Clone)]
pub struct TickFormatter(Arc<dyn Fn(f64, usize, &[f64]) -> String + Send + Sync>);

impl TickFormatter {
    pub fn new(f: impl Fn(f64, usize, &[f64]) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// `0.5` -> `"0.5"`.
    pub fn resistance() -> Self {
        Self::new(|tick, _, _| format!("{tick}"))
    }

    /// `-2` -> `"-2i"`.
    pub fn reactance() -> Self {
        Self::new(|tick, _, _| format!("{tick}i"))
    }

    pub fn format(&self, tick: f64, index: usize, ticks: &[f64]) -> String {
        (self.0)(tick, index, ticks)
    }

    pub fn format_all(&self, ticks: &[f64]) -> Vec<String> {
        ticks.iter().enumerate().map(|(i, &t)| self.format(t, i, ticks)).collect()
    }
}

impl fmt::Debug for TickFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TickFormatter(..)")
    }
}
