//! Team snapshots and ranked scoring results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{LeagueId, StatValue, TeamId};

/// One team's stat snapshot for a single aggregation run.
///
/// Identity fields come from the upstream provider; `stats` maps category
/// id to the observed value. A team missing a slate category is scored as
/// zero points for it and reported in the run's data-quality flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSnapshot {
    /// Team identifier, unique across all leagues in the run
    pub team: TeamId,

    /// Team display name
    pub name: String,

    /// Owner display name(s), comma-joined upstream
    pub owner: String,

    /// League this team plays in
    pub league: LeagueId,

    /// League display name
    pub league_name: String,

    /// Final rank within the team's own league, when known
    pub league_rank: Option<u32>,

    /// Category id → observed value
    pub stats: HashMap<String, StatValue>,
}

/// A raw value plus the rank points derived from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankedPoints {
    /// Raw value as scored
    pub value: f64,

    /// Tie-averaged rank points (equal across tied teams)
    pub points: f64,
}

/// A team's scored snapshot in the cross-league ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResult {
    /// Team identifier
    pub team: TeamId,

    /// Team display name
    pub name: String,

    /// Owner display name(s)
    pub owner: String,

    /// League display name
    pub league_name: String,

    /// Final rank within the team's own league, when known
    pub league_rank: Option<u32>,

    /// Category id → value and derived points
    pub points: HashMap<String, RankedPoints>,

    /// Sum of rank points across the slate
    pub total_points: f64,

    /// 1-based position by descending total points (dense, ties unmerged)
    pub overall_rank: u32,
}

/// A (team, category) pair flagged during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedStat {
    pub team: TeamId,
    pub category: String,
}

/// The full output of one cross-league scoring run.
///
/// `missing` lists (team, category) pairs with no reported value (scored as
/// zero); `ineligible` lists values the provider flagged but which were
/// still scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallRanking {
    /// Teams ordered by overall rank
    pub teams: Vec<TeamResult>,

    /// Pairs with no reported value
    pub missing: Vec<FlaggedStat>,

    /// Pairs the provider marked ineligible
    pub ineligible: Vec<FlaggedStat>,
}

/// Keyed lookup from team id to display names, built once per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamDirectory {
    entries: HashMap<TeamId, TeamEntry>,
}

/// Display names for one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    pub name: String,
    pub owner: String,
}

impl TeamDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team's display names.
    pub fn insert(&mut self, team: TeamId, name: impl Into<String>, owner: impl Into<String>) {
        self.entries.insert(
            team,
            TeamEntry {
                name: name.into(),
                owner: owner.into(),
            },
        );
    }

    /// Look up a team's display name, falling back to the raw id.
    pub fn name_of(&self, team: &TeamId) -> String {
        self.entries
            .get(team)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| team.to_string())
    }

    /// Build a directory from scored snapshots.
    pub fn from_snapshots(snapshots: &[TeamSnapshot]) -> Self {
        let mut dir = Self::new();
        for snap in snapshots {
            dir.insert(snap.team.clone(), snap.name.clone(), snap.owner.clone());
        }
        dir
    }
}
