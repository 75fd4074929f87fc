//! Aggregation and scoring engine.
//!
//! Computes comparable cross-league outputs from immutable input snapshots:
//! - Tie-averaged rank points per category and overall totals
//! - Weighted composite power rankings for a scoring period
//! - Head-to-head records with streak tracking
//! - Keeper round calculation and eligibility
//! - Multi-season standings
//! - League-history superlatives (margins, weeks, seasons)
//!
//! Every function is pure, synchronous, and deterministic over its inputs;
//! callers own any concurrency across independent runs.

pub mod head_to_head;
pub mod keepers;
pub mod power;
pub mod rank_points;
pub mod records;
pub mod standings;

use thiserror::Error;

use crate::models::TeamId;

/// Errors surfaced by engine computations.
///
/// Empty inputs are not errors: zero teams or zero matchups produce
/// empty/neutral results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("category '{0}' has no values across any team")]
    EmptyCategory(String),

    #[error("factor weights sum to zero")]
    ZeroWeightSum,

    #[error("matchup in {year} week {week} involves team '{team}', which is not in this pair")]
    UnexpectedTeam { year: i32, week: u32, team: TeamId },

    #[error("invalid year range: start {start} is after end {end}")]
    ReversedYearRange { start: i32, end: i32 },

    #[error("year {year} is outside the known seasons {first}..={last}")]
    YearOutOfRange { year: i32, first: i32, last: i32 },
}

/// Arithmetic mean of a slice. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (N denominator).
///
/// Returns 0.0 for an empty slice. The population form matches scoring
/// over a complete set of weeks rather than a sample.
pub fn population_stdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Sample standard deviation (N-1 denominator). `None` for fewer than two
/// values, where the statistic is undefined.
pub fn sample_stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Median of a slice. Returns 0.0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
