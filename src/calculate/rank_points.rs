//! Tie-averaged rank points per category and the overall cross-league
//! ranking built from them.

use std::cmp::Ordering;

use tracing::warn;

use super::{mean, EngineError};
use crate::models::{
    FlaggedStat, OverallRanking, RankedPoints, Slate, TeamResult, TeamSnapshot,
};

/// Assign rank points to one category's values.
///
/// Values are ranked over the full sorted multiset with 1-based positions;
/// a better value gets a higher position in both directions (the sort is
/// reversed when lower is better). Tied values each receive the arithmetic
/// mean of the contiguous block of positions they occupy, so the total
/// rank mass 1 + 2 + ... + n is preserved regardless of ties.
///
/// Output order matches input order; reordering the input multiset never
/// changes any value's points.
pub fn category_points(values: &[f64], higher_is_better: bool) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if !higher_is_better {
        sorted.reverse();
    }

    values
        .iter()
        .map(|v| {
            let positions: Vec<f64> = sorted
                .iter()
                .enumerate()
                .filter(|(_, s)| *s == v)
                .map(|(i, _)| (i + 1) as f64)
                .collect();
            mean(&positions)
        })
        .collect()
}

/// Score a set of team snapshots against a category slate.
///
/// Each category is ranked independently with [`category_points`]; a
/// team's `total_points` is the sum across the slate. Teams are ordered
/// by descending total (stable, so equal totals keep snapshot order) and
/// `overall_rank` is the dense 1-based position in that order.
///
/// A team with no value for a slate category contributes nothing to that
/// category and scores zero for it; the pair is reported in
/// [`OverallRanking::missing`] rather than silently dropped. A category
/// with no value on any team is an error. Provider-flagged ineligible
/// values are scored as-is and reported in [`OverallRanking::ineligible`].
pub fn score_teams(
    slate: &Slate,
    snapshots: &[TeamSnapshot],
) -> Result<OverallRanking, EngineError> {
    if snapshots.is_empty() {
        return Ok(OverallRanking {
            teams: Vec::new(),
            missing: Vec::new(),
            ineligible: Vec::new(),
        });
    }

    let mut missing = Vec::new();
    let mut ineligible = Vec::new();

    let mut results: Vec<TeamResult> = snapshots
        .iter()
        .map(|snap| TeamResult {
            team: snap.team.clone(),
            name: snap.name.clone(),
            owner: snap.owner.clone(),
            league_name: snap.league_name.clone(),
            league_rank: snap.league_rank,
            points: Default::default(),
            total_points: 0.0,
            overall_rank: 0,
        })
        .collect();

    for category in slate {
        // Indexes into `results` for teams that reported this category.
        let mut holders = Vec::new();
        let mut values = Vec::new();

        for (idx, snap) in snapshots.iter().enumerate() {
            match snap.stats.get(&category.id) {
                Some(stat) => {
                    if stat.ineligible {
                        ineligible.push(FlaggedStat {
                            team: snap.team.clone(),
                            category: category.id.clone(),
                        });
                    }
                    holders.push(idx);
                    values.push(stat.value);
                }
                None => {
                    warn!(
                        "team '{}' has no value for category '{}'; scoring as zero",
                        snap.team, category.id
                    );
                    missing.push(FlaggedStat {
                        team: snap.team.clone(),
                        category: category.id.clone(),
                    });
                }
            }
        }

        if values.is_empty() {
            return Err(EngineError::EmptyCategory(category.id.clone()));
        }

        let points = category_points(&values, category.higher_is_better);
        for ((idx, value), pts) in holders.iter().zip(&values).zip(&points) {
            results[*idx].points.insert(
                category.id.clone(),
                RankedPoints {
                    value: *value,
                    points: *pts,
                },
            );
            results[*idx].total_points += pts;
        }
    }

    results.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(Ordering::Equal)
    });
    for (i, result) in results.iter_mut().enumerate() {
        result.overall_rank = (i + 1) as u32;
    }

    Ok(OverallRanking {
        teams: results,
        missing,
        ineligible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, LeagueId, StatValue, TeamId};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn snapshot(id: &str, stats: &[(&str, f64)]) -> TeamSnapshot {
        TeamSnapshot {
            team: TeamId::from(id),
            name: format!("Team {}", id),
            owner: format!("Owner {}", id),
            league: LeagueId::from("league-1"),
            league_name: "Addicts".to_string(),
            league_rank: None,
            stats: stats
                .iter()
                .map(|(cat, v)| (cat.to_string(), StatValue::new(*v)))
                .collect(),
        }
    }

    #[test]
    fn test_tied_block_averages() {
        let points = category_points(&[10.0, 10.0, 10.0, 20.0, 30.0], true);
        assert_eq!(points, vec![2.0, 2.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_lower_is_better_reverses() {
        // Smallest ERA earns the top position.
        let points = category_points(&[3.10, 4.25, 2.95], false);
        assert_eq!(points, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_rank_mass_preserved() {
        let values = [7.0, 7.0, 7.0, 7.0, 12.0, 12.0, 1.0];
        let n = values.len() as f64;
        let total: f64 = category_points(&values, true).iter().sum();
        assert!((total - n * (n + 1.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_independence() {
        let forward = category_points(&[5.0, 9.0, 9.0, 2.0], true);
        let reversed = category_points(&[2.0, 9.0, 9.0, 5.0], true);
        assert_eq!(forward[0], reversed[3]);
        assert_eq!(forward[1], reversed[1]);
        assert_eq!(forward[3], reversed[0]);
    }

    #[test]
    fn test_single_distinct_value() {
        let points = category_points(&[4.0, 4.0, 4.0, 4.0, 4.0], true);
        // Everyone gets (n + 1) / 2.
        assert_eq!(points, vec![3.0; 5]);
    }

    #[test]
    fn test_score_teams_totals_and_rank() {
        let slate = vec![Category::new("runs", true), Category::new("era", false)];
        let snapshots = vec![
            snapshot("1", &[("runs", 100.0), ("era", 3.50)]),
            snapshot("2", &[("runs", 120.0), ("era", 4.00)]),
            snapshot("3", &[("runs", 90.0), ("era", 3.00)]),
        ];

        let ranking = score_teams(&slate, &snapshots).unwrap();
        assert!(ranking.missing.is_empty());

        // runs: 90 -> 1, 100 -> 2, 120 -> 3; era: 4.00 -> 1, 3.50 -> 2, 3.00 -> 3
        let by_id: HashMap<&str, &TeamResult> = ranking
            .teams
            .iter()
            .map(|t| (t.team.as_str(), t))
            .collect();
        assert_eq!(by_id["1"].total_points, 4.0);
        assert_eq!(by_id["2"].total_points, 4.0);
        assert_eq!(by_id["3"].total_points, 4.0);

        // Equal totals keep snapshot order; ranks stay dense.
        let ranks: Vec<(&str, u32)> = ranking
            .teams
            .iter()
            .map(|t| (t.team.as_str(), t.overall_rank))
            .collect();
        assert_eq!(ranks, vec![("1", 1), ("2", 2), ("3", 3)]);
    }

    #[test]
    fn test_score_teams_descending_totals() {
        let slate = vec![Category::new("runs", true)];
        let snapshots = vec![
            snapshot("low", &[("runs", 50.0)]),
            snapshot("high", &[("runs", 80.0)]),
            snapshot("mid", &[("runs", 65.0)]),
        ];

        let ranking = score_teams(&slate, &snapshots).unwrap();
        let order: Vec<&str> = ranking.teams.iter().map(|t| t.team.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
        assert_eq!(ranking.teams[0].overall_rank, 1);
    }

    #[test]
    fn test_score_teams_missing_value_flagged() {
        let slate = vec![Category::new("runs", true), Category::new("hr", true)];
        let snapshots = vec![
            snapshot("1", &[("runs", 100.0), ("hr", 30.0)]),
            snapshot("2", &[("runs", 110.0)]),
        ];

        let ranking = score_teams(&slate, &snapshots).unwrap();
        assert_eq!(
            ranking.missing,
            vec![FlaggedStat {
                team: TeamId::from("2"),
                category: "hr".to_string(),
            }]
        );
        let team2 = ranking
            .teams
            .iter()
            .find(|t| t.team.as_str() == "2")
            .unwrap();
        assert!(!team2.points.contains_key("hr"));
        // Only the runs points counted: team 2 ranked above team 1 there.
        assert_eq!(team2.total_points, 2.0);
    }

    #[test]
    fn test_score_teams_empty_category_is_error() {
        let slate = vec![Category::new("svhd", true)];
        let snapshots = vec![snapshot("1", &[("runs", 100.0)])];

        let err = score_teams(&slate, &snapshots).unwrap_err();
        assert_eq!(err, EngineError::EmptyCategory("svhd".to_string()));
    }

    #[test]
    fn test_score_teams_empty_input_is_empty_result() {
        let slate = vec![Category::new("runs", true)];
        let ranking = score_teams(&slate, &[]).unwrap();
        assert!(ranking.teams.is_empty());
        assert!(ranking.missing.is_empty());
    }

    #[test]
    fn test_score_teams_ineligible_annotated_but_scored() {
        let slate = vec![Category::new("runs", true)];
        let mut flagged = snapshot("1", &[]);
        flagged.stats.insert(
            "runs".to_string(),
            StatValue {
                value: 120.0,
                ineligible: true,
            },
        );
        let snapshots = vec![flagged, snapshot("2", &[("runs", 100.0)])];

        let ranking = score_teams(&slate, &snapshots).unwrap();
        assert_eq!(
            ranking.ineligible,
            vec![FlaggedStat {
                team: TeamId::from("1"),
                category: "runs".to_string(),
            }]
        );
        // Still ranked first on the flagged value.
        assert_eq!(ranking.teams[0].team, TeamId::from("1"));
    }

    #[test]
    fn test_score_teams_order_independent_totals() {
        let slate = vec![Category::new("runs", true), Category::new("era", false)];
        let forward = vec![
            snapshot("1", &[("runs", 100.0), ("era", 3.50)]),
            snapshot("2", &[("runs", 120.0), ("era", 4.00)]),
            snapshot("3", &[("runs", 90.0), ("era", 3.00)]),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let a = score_teams(&slate, &forward).unwrap();
        let b = score_teams(&slate, &backward).unwrap();
        for team in &a.teams {
            let other = b
                .teams
                .iter()
                .find(|t| t.team == team.team)
                .expect("team present in both runs");
            assert_eq!(team.total_points, other.total_points);
        }
    }
}
