//! Power-ranking factor models.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// One team's result for one scoring week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyResult {
    /// Week within the scoring period
    pub week: u32,

    /// Points scored
    pub score: f64,

    /// Opponent's points
    pub opponent_score: f64,
}

impl WeeklyResult {
    /// Whether this week was a win. A tie is not a win.
    pub fn won(&self) -> bool {
        self.score > self.opponent_score
    }
}

/// A team's chronological weekly results for one scoring period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWeekly {
    /// Team identifier
    pub team: TeamId,

    /// Team display name
    pub name: String,

    /// Results ascending by week
    pub results: Vec<WeeklyResult>,
}

/// Derived scoring factors for one team over a period.
///
/// The first five fields are the ranked power factors; the rest are
/// display extras carried alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamFactors {
    /// Team identifier
    pub team: TeamId,

    /// Team display name
    pub name: String,

    /// Head-to-head wins
    pub wins: u32,

    /// Sum over weeks of league scores beaten that week
    pub overall_wins: u32,

    /// Total points scored
    pub points: f64,

    /// Wins in the last five weeks
    pub recent_form: u32,

    /// Population standard deviation of weekly scores (lower is better)
    pub consistency: f64,

    /// Mean weekly score
    pub avg_score: f64,

    /// Mean weekly points against
    pub avg_against: f64,

    /// Weeks scoring above the league median
    pub median_wins: u32,

    /// Weeks scoring above the boom threshold
    pub booms: u32,

    /// Weeks scoring below the bust threshold
    pub busts: u32,
}

/// Weight applied to each power factor. All weights must be non-negative
/// and at least one must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub wins: f64,
    pub overall_wins: f64,
    pub points: f64,
    pub recent_form: f64,
    pub consistency: f64,
}

impl FactorWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.wins + self.overall_wins + self.points + self.recent_form + self.consistency
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            wins: 3.0,
            overall_wins: 1.0,
            points: 2.0,
            recent_form: 1.0,
            consistency: 1.0,
        }
    }
}

/// Score cutoffs for counting boom and bust weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// A week scoring above this counts as a boom
    pub boom: f64,

    /// A week scoring below this counts as a bust
    pub bust: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            boom: 140.0,
            bust: 90.0,
        }
    }
}

/// One team's row in the power rankings, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerRanking {
    /// Weighted composite of factor ranks; lower is better
    pub score: f64,

    /// The factors the score was computed from
    pub factors: TeamFactors,
}
