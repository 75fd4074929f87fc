//! Matchup model — individual game results between two teams.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// One side of a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSide {
    /// Team on this side
    pub team: TeamId,

    /// Points scored by this side
    pub score: f64,
}

/// A single historical matchup between two teams.
///
/// Ordering by `(year, week)` is significant; the aggregators expect
/// chronological input and sort defensively where it matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    /// Season year
    pub year: i32,

    /// Week within the season
    pub week: u32,

    /// Home side
    pub home: MatchupSide,

    /// Away side
    pub away: MatchupSide,

    /// Whether this was a playoff matchup
    #[serde(default)]
    pub playoff: bool,
}

/// Result of a matchup from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Matchup {
    /// Create a new matchup.
    pub fn new(year: i32, week: u32, home: MatchupSide, away: MatchupSide) -> Self {
        Self {
            year,
            week,
            home,
            away,
            playoff: false,
        }
    }

    /// Winning side, or `None` for a tie.
    pub fn winner(&self) -> Option<&MatchupSide> {
        if self.home.score > self.away.score {
            Some(&self.home)
        } else if self.away.score > self.home.score {
            Some(&self.away)
        } else {
            None
        }
    }

    /// Losing side, or `None` for a tie.
    pub fn loser(&self) -> Option<&MatchupSide> {
        if self.home.score > self.away.score {
            Some(&self.away)
        } else if self.away.score > self.home.score {
            Some(&self.home)
        } else {
            None
        }
    }

    /// Absolute score margin.
    pub fn margin(&self) -> f64 {
        (self.home.score - self.away.score).abs()
    }

    /// The side a team played on, if it took part.
    pub fn side_of(&self, team: &TeamId) -> Option<&MatchupSide> {
        if &self.home.team == team {
            Some(&self.home)
        } else if &self.away.team == team {
            Some(&self.away)
        } else {
            None
        }
    }

    /// Outcome from a team's perspective, if it took part.
    pub fn outcome_for(&self, team: &TeamId) -> Option<Outcome> {
        let side = self.side_of(team)?;
        let other = if side == &self.home {
            &self.away
        } else {
            &self.home
        };
        Some(if side.score > other.score {
            Outcome::Win
        } else if side.score < other.score {
            Outcome::Loss
        } else {
            Outcome::Tie
        })
    }
}

/// Win/tie/points tally for one team within one partition of a pairwise
/// history (regular season or playoffs). Losses are the other team's wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairTally {
    pub wins: u32,
    pub ties: u32,
    pub points: f64,
}

/// A run of consecutive wins by one team over the other.
///
/// `team` is the winning side; in a two-team history the same run is a
/// loss streak for the opponent. An empty history (or a run broken by a
/// tie) is `length` 0 with no holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    /// Winning team, `None` when no streak is active
    pub team: Option<TeamId>,

    /// Number of consecutive wins
    pub length: u32,
}

impl Streak {
    /// The zero-length streak.
    pub fn none() -> Self {
        Self {
            team: None,
            length: 0,
        }
    }
}

/// One team's side of a head-to-head record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadSide {
    /// Team identifier
    pub team: TeamId,

    /// Regular season tally against the rival
    pub regular: PairTally,

    /// Playoff tally against the rival
    pub playoff: PairTally,
}

/// The full pairwise record between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    /// First team's tallies
    pub team1: HeadToHeadSide,

    /// Second team's tallies
    pub team2: HeadToHeadSide,

    /// Count of regular season matchups replayed
    pub regular_matchups: u32,

    /// Count of playoff matchups replayed
    pub playoff_matchups: u32,

    /// Run ending at the most recent matchup
    pub current_streak: Streak,

    /// Longest run ever observed (most recent run wins a length tie)
    pub longest_streak: Streak,
}
