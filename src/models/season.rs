//! Season records and multi-year standings models.

use serde::{Deserialize, Serialize};

use super::OwnerId;

/// One team's final record for one season. Immutable once a season closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    /// Season year
    pub year: i32,

    /// Regular season wins
    pub wins: u32,

    /// Regular season losses
    pub losses: u32,

    /// Regular season ties
    pub ties: u32,

    /// Finished first in the regular season
    #[serde(default)]
    pub reg_season_champ: bool,

    /// Won the playoff bracket
    #[serde(default)]
    pub playoff_champ: bool,

    /// Finished last in the regular season
    #[serde(default)]
    pub toilet_bowl: bool,
}

impl SeasonRecord {
    /// Create a record with no champion flags.
    pub fn new(year: i32, wins: u32, losses: u32, ties: u32) -> Self {
        Self {
            year,
            wins,
            losses,
            ties,
            reg_season_champ: false,
            playoff_champ: false,
            toilet_bowl: false,
        }
    }
}

/// An owner's season history. Owners persist across team renames, so
/// standings key on the owner rather than any single team identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasons {
    /// Owner identifier
    pub owner: OwnerId,

    /// Owner display name
    pub name: String,

    /// One record per season played, any order
    pub seasons: Vec<SeasonRecord>,
}

/// Win/loss/tie totals summed over a year range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTotals {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,

    /// wins / (wins + losses); `None` when the team has only ties
    pub win_pct: Option<f64>,
}

impl RecordTotals {
    /// Fold a season into the totals. `win_pct` is recomputed on each fold.
    pub fn add(&mut self, season: &SeasonRecord) {
        self.wins += season.wins;
        self.losses += season.losses;
        self.ties += season.ties;
        let decisive = self.wins + self.losses;
        self.win_pct = if decisive == 0 {
            None
        } else {
            Some(self.wins as f64 / decisive as f64)
        };
    }
}

/// One owner's row in the standings table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    /// Owner identifier
    pub owner: OwnerId,

    /// Owner display name
    pub name: String,

    /// Totals over the requested range
    pub totals: RecordTotals,

    /// Individual season records within the range, ascending by year
    pub seasons: Vec<SeasonRecord>,
}

/// The standings view for a year range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable {
    /// Years covered, ascending
    pub seasons: Vec<i32>,

    /// One row per owner, input order preserved
    pub teams: Vec<TeamStanding>,
}
