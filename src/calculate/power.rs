//! Weighted composite power rankings for one scoring period.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use super::{mean, median, population_stdev, EngineError};
use crate::models::{FactorWeights, PowerRanking, ScoreThresholds, TeamFactors, TeamWeekly};

/// Fold a period of weekly results into per-team power factors.
///
/// Besides the five ranked factors (wins, overall wins, points, last-5
/// form, consistency), the output carries display extras: score averages,
/// median wins, and boom/bust counts against the given thresholds.
///
/// Overall wins credit a team, for each week, with one win per league
/// score strictly below its own that week, i.e. how the team would fare
/// playing the whole league at once.
pub fn derive_factors(teams: &[TeamWeekly], thresholds: &ScoreThresholds) -> Vec<TeamFactors> {
    // All scores posted league-wide, by week.
    let mut week_scores: HashMap<u32, Vec<f64>> = HashMap::new();
    for team in teams {
        for result in &team.results {
            week_scores.entry(result.week).or_default().push(result.score);
        }
    }
    let week_medians: HashMap<u32, f64> = week_scores
        .iter()
        .map(|(week, scores)| (*week, median(scores)))
        .collect();

    let factors: Vec<TeamFactors> = teams
        .iter()
        .map(|team| {
            let scores: Vec<f64> = team.results.iter().map(|r| r.score).collect();
            let against: Vec<f64> = team.results.iter().map(|r| r.opponent_score).collect();

            let wins = team.results.iter().filter(|r| r.won()).count() as u32;
            let last_five_start = team.results.len().saturating_sub(5);
            let recent_form = team.results[last_five_start..]
                .iter()
                .filter(|r| r.won())
                .count() as u32;

            let overall_wins = team
                .results
                .iter()
                .map(|r| {
                    week_scores[&r.week]
                        .iter()
                        .filter(|s| **s < r.score)
                        .count() as u32
                })
                .sum();

            let median_wins = team
                .results
                .iter()
                .filter(|r| r.score > week_medians[&r.week])
                .count() as u32;

            TeamFactors {
                team: team.team.clone(),
                name: team.name.clone(),
                wins,
                overall_wins,
                points: scores.iter().sum(),
                recent_form,
                consistency: population_stdev(&scores),
                avg_score: mean(&scores),
                avg_against: mean(&against),
                median_wins,
                booms: scores.iter().filter(|s| **s > thresholds.boom).count() as u32,
                busts: scores.iter().filter(|s| **s < thresholds.bust).count() as u32,
            }
        })
        .collect();

    debug!("derived power factors for {} teams", factors.len());
    factors
}

/// Compute power rankings from per-team factors.
///
/// Each factor ranks teams 1..n independently: descending by raw value,
/// except consistency which ranks ascending (a steadier team is better).
/// Tied values all take the first index of the shared value, which is
/// deterministic and consistent across runs. The composite score is the
/// weighted mean of a team's factor ranks; the output is sorted ascending
/// by score (stable), best team first.
pub fn power_rankings(
    factors: &[TeamFactors],
    weights: &FactorWeights,
) -> Result<Vec<PowerRanking>, EngineError> {
    if factors.is_empty() {
        return Ok(Vec::new());
    }
    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return Err(EngineError::ZeroWeightSum);
    }

    let wins: Vec<f64> = factors.iter().map(|f| f.wins as f64).collect();
    let overall: Vec<f64> = factors.iter().map(|f| f.overall_wins as f64).collect();
    let points: Vec<f64> = factors.iter().map(|f| f.points).collect();
    let form: Vec<f64> = factors.iter().map(|f| f.recent_form as f64).collect();
    let consistency: Vec<f64> = factors.iter().map(|f| f.consistency).collect();

    let mut rankings: Vec<PowerRanking> = factors
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let score = (index_rank(&wins, wins[i], true) * weights.wins
                + index_rank(&overall, overall[i], true) * weights.overall_wins
                + index_rank(&points, points[i], true) * weights.points
                + index_rank(&form, form[i], true) * weights.recent_form
                + index_rank(&consistency, consistency[i], false) * weights.consistency)
                / total_weight;
            PowerRanking {
                score,
                factors: team.clone(),
            }
        })
        .collect();

    rankings.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    Ok(rankings)
}

/// 1-based rank of `value` among `all`: position of its first occurrence
/// once sorted in the given direction.
fn index_rank(all: &[f64], value: f64, descending: bool) -> f64 {
    let mut sorted = all.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if descending {
        sorted.reverse();
    }
    let position = sorted
        .iter()
        .position(|s| *s == value)
        .expect("value drawn from the ranked set");
    (position + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TeamId, WeeklyResult};
    use pretty_assertions::assert_eq;

    fn weekly(team: &str, rows: &[(u32, f64, f64)]) -> TeamWeekly {
        TeamWeekly {
            team: TeamId::from(team),
            name: format!("Team {}", team),
            results: rows
                .iter()
                .map(|(week, score, against)| WeeklyResult {
                    week: *week,
                    score: *score,
                    opponent_score: *against,
                })
                .collect(),
        }
    }

    fn factors(team: &str, wins: u32, points: f64, consistency: f64) -> TeamFactors {
        TeamFactors {
            team: TeamId::from(team),
            name: format!("Team {}", team),
            wins,
            overall_wins: wins,
            points,
            recent_form: wins.min(5),
            consistency,
            avg_score: 0.0,
            avg_against: 0.0,
            median_wins: 0,
            booms: 0,
            busts: 0,
        }
    }

    #[test]
    fn test_derive_factors_basic() {
        let teams = vec![
            weekly("a", &[(1, 120.0, 100.0), (2, 80.0, 95.0)]),
            weekly("b", &[(1, 100.0, 120.0), (2, 95.0, 80.0)]),
            weekly("c", &[(1, 110.0, 90.0), (2, 105.0, 70.0)]),
            weekly("d", &[(1, 90.0, 110.0), (2, 70.0, 105.0)]),
        ];

        let derived = derive_factors(&teams, &ScoreThresholds::default());
        let a = &derived[0];
        assert_eq!(a.wins, 1);
        assert_eq!(a.points, 200.0);
        assert_eq!(a.avg_score, 100.0);
        // Week 1: 120 tops all three other scores; week 2: 80 beats only 70.
        assert_eq!(a.overall_wins, 4);
        // pstdev([120, 80]) = 20
        assert!((a.consistency - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_derive_factors_recent_form_window() {
        let rows: Vec<(u32, f64, f64)> = (1..=8)
            .map(|week| {
                // Lost the first three weeks, won the rest.
                if week <= 3 {
                    (week, 80.0, 100.0)
                } else {
                    (week, 100.0, 80.0)
                }
            })
            .collect();
        let derived = derive_factors(&[weekly("a", &rows)], &ScoreThresholds::default());
        assert_eq!(derived[0].wins, 5);
        assert_eq!(derived[0].recent_form, 5);
    }

    #[test]
    fn test_derive_factors_median_and_booms() {
        let teams = vec![
            weekly("a", &[(1, 150.0, 60.0)]),
            weekly("b", &[(1, 100.0, 60.0)]),
            weekly("c", &[(1, 60.0, 100.0)]),
        ];
        let derived = derive_factors(&teams, &ScoreThresholds::default());
        assert_eq!(derived[0].median_wins, 1);
        assert_eq!(derived[1].median_wins, 0); // 100 is the median, not above it
        assert_eq!(derived[0].booms, 1);
        assert_eq!(derived[2].busts, 1);
    }

    #[test]
    fn test_power_rankings_orders_ascending() {
        let teams = vec![
            factors("worst", 2, 900.0, 30.0),
            factors("best", 10, 1400.0, 10.0),
            factors("mid", 6, 1100.0, 20.0),
        ];

        let rankings = power_rankings(&teams, &FactorWeights::default()).unwrap();
        let order: Vec<&str> = rankings
            .iter()
            .map(|r| r.factors.team.as_str())
            .collect();
        assert_eq!(order, vec!["best", "mid", "worst"]);
        assert_eq!(rankings[0].score, 1.0);
        assert_eq!(rankings[2].score, 3.0);
    }

    #[test]
    fn test_power_rankings_consistency_ranks_ascending() {
        // Identical except consistency; the steadier team must come out ahead.
        let mut steady = factors("steady", 5, 1000.0, 5.0);
        let mut streaky = factors("streaky", 5, 1000.0, 25.0);
        steady.overall_wins = 40;
        streaky.overall_wins = 40;

        let rankings = power_rankings(
            &[streaky.clone(), steady.clone()],
            &FactorWeights::default(),
        )
        .unwrap();
        assert_eq!(rankings[0].factors.team.as_str(), "steady");
    }

    #[test]
    fn test_power_rankings_tied_factor_shares_rank() {
        let a = factors("a", 5, 1000.0, 10.0);
        let b = factors("b", 5, 1000.0, 10.0);
        let rankings = power_rankings(&[a, b], &FactorWeights::default()).unwrap();
        assert_eq!(rankings[0].score, rankings[1].score);
    }

    #[test]
    fn test_power_rankings_zero_weights_is_error() {
        let weights = FactorWeights {
            wins: 0.0,
            overall_wins: 0.0,
            points: 0.0,
            recent_form: 0.0,
            consistency: 0.0,
        };
        let err = power_rankings(&[factors("a", 1, 100.0, 1.0)], &weights).unwrap_err();
        assert_eq!(err, EngineError::ZeroWeightSum);
    }

    #[test]
    fn test_power_rankings_empty_input() {
        let rankings = power_rankings(&[], &FactorWeights::default()).unwrap();
        assert!(rankings.is_empty());
    }
}
