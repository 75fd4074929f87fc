//! Scoring categories and observed stat values.

use serde::{Deserialize, Serialize};

/// One statistical dimension being scored (e.g. "runs", "era").
///
/// `higher_is_better` gives the direction of comparison: false for stats
/// like ERA or WHIP where a lower value beats a higher one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier, unique within a slate
    pub id: String,

    /// Whether a larger raw value ranks above a smaller one
    pub higher_is_better: bool,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<String>, higher_is_better: bool) -> Self {
        Self {
            id: id.into(),
            higher_is_better,
        }
    }
}

/// An ordered list of categories scored together in one aggregation run.
///
/// The order is the display order; every scoring entry point takes the
/// slate explicitly so the engine stays sport-agnostic.
pub type Slate = Vec<Category>;

/// A single observed value for one team in one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Raw value as reported by the upstream provider
    pub value: f64,

    /// Provider-side eligibility flag. Flagged values are still scored but
    /// surfaced in the run's data-quality report.
    #[serde(default)]
    pub ineligible: bool,
}

impl StatValue {
    /// Create an eligible stat value.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ineligible: false,
        }
    }
}
