//! Keeper round calculation and eligibility filtering.

use crate::models::{Acquisition, KeeperCandidate, KeeperOption, KeeperRules};

/// The draft round a candidate would cost to keep.
///
/// Drafted players escalate: each season costs `escalation_rounds` rounds
/// earlier than where they were drafted, clamped at round 1. Undrafted
/// pickups cost the flat configured round with no escalation.
pub fn keeper_round(rules: &KeeperRules, candidate: &KeeperCandidate) -> u32 {
    match candidate.acquisition {
        Acquisition::Draft { round } => round.saturating_sub(rules.escalation_rounds).max(1),
        Acquisition::FreeAgent => rules.undrafted_round,
    }
}

/// Filter candidates down to eligible keepers, each annotated with the
/// round it would cost.
///
/// A candidate survives only if it has keeper years remaining, its
/// computed round is not earlier than the configured floor (when one is
/// set), and it satisfies the trade-deadline rule (when required).
/// Ineligible candidates are dropped, not flagged.
pub fn eligible_keepers(rules: &KeeperRules, candidates: &[KeeperCandidate]) -> Vec<KeeperOption> {
    candidates
        .iter()
        .filter_map(|candidate| {
            if candidate.years_kept >= rules.max_years_kept {
                return None;
            }
            if rules.require_acquired_before_deadline && !candidate.acquired_before_deadline {
                return None;
            }
            let round = keeper_round(rules, candidate);
            if let Some(earliest) = rules.earliest_eligible_round {
                if round < earliest {
                    return None;
                }
            }
            Some(KeeperOption {
                player: candidate.player.clone(),
                acquisition: candidate.acquisition,
                years_kept: candidate.years_kept,
                keeper_round: round,
            })
        })
        .collect()
}
