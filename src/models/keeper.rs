//! Keeper candidates and keeper rule configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a player arrived on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Acquisition {
    /// Drafted at the given round in the most recent draft
    Draft { round: u32 },

    /// Picked up undrafted (free agency or waivers)
    FreeAgent,
}

/// A rostered player being considered for keeper status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeeperCandidate {
    /// Player display name
    pub player: String,

    /// How the player was acquired
    pub acquisition: Acquisition,

    /// When the player was acquired
    pub acquired_at: DateTime<Utc>,

    /// Seasons this player has already been kept
    pub years_kept: u32,

    /// Whether the acquisition predates the league's trade deadline
    pub acquired_before_deadline: bool,
}

/// League keeper rules, supplied per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeeperRules {
    /// Maximum consecutive seasons a player may be kept
    pub max_years_kept: u32,

    /// Earliest (lowest-numbered) round a keeper may cost; `None` for no floor
    pub earliest_eligible_round: Option<u32>,

    /// Rounds earlier than the draft round a keeper costs each season
    pub escalation_rounds: u32,

    /// Flat round charged for undrafted players
    pub undrafted_round: u32,

    /// Require acquisition before the trade deadline
    pub require_acquired_before_deadline: bool,
}

impl Default for KeeperRules {
    fn default() -> Self {
        Self {
            max_years_kept: 2,
            earliest_eligible_round: None,
            escalation_rounds: 2,
            undrafted_round: 15,
            require_acquired_before_deadline: true,
        }
    }
}

/// An eligible keeper annotated with the round it would cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeeperOption {
    /// Player display name
    pub player: String,

    /// How the player was acquired
    pub acquisition: Acquisition,

    /// Seasons already kept
    pub years_kept: u32,

    /// Draft round this keeper would cost
    pub keeper_round: u32,
}
