//! League-history superlatives: biggest margins, best and worst weeks,
//! and outlier seasons.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::{mean, sample_stdev, EngineError};
use crate::models::{Matchup, TeamDirectory, TeamId};

/// Slice of history to consider for a records query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// First year to include; `None` for the earliest known
    pub start_year: Option<i32>,

    /// Last year to include; `None` for the latest known
    pub end_year: Option<i32>,

    /// Whether playoff matchups count
    #[serde(default)]
    pub include_playoffs: bool,
}

/// A matchup decided by a notable margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRecord {
    pub year: i32,
    pub week: u32,
    pub margin: f64,
    pub winner: String,
    pub loser: String,
}

/// A single team-week score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekScore {
    pub year: i32,
    pub week: u32,
    pub team: String,
    pub score: f64,
}

/// A team-season measured against its year's league average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDeviation {
    pub year: i32,
    pub team: String,

    /// Team's average weekly score
    pub average: f64,

    /// League-wide average weekly score that year
    pub league_average: f64,

    /// Signed distance from the league average, in sample standard
    /// deviations of that year's team averages
    pub std_dev_away: f64,
}

/// The biggest (or narrowest) wins in the filtered history.
///
/// Drawn matchups produce no record; a tie has no winner or loser.
pub fn matchup_margins(
    matchups: &[Matchup],
    directory: &TeamDirectory,
    filter: &HistoryFilter,
    count: usize,
    largest: bool,
) -> Result<Vec<MarginRecord>, EngineError> {
    let mut records: Vec<MarginRecord> = filtered(matchups, filter)?
        .into_iter()
        .filter_map(|m| {
            let winner = m.winner()?;
            let loser = m.loser()?;
            Some(MarginRecord {
                year: m.year,
                week: m.week,
                margin: m.margin(),
                winner: directory.name_of(&winner.team),
                loser: directory.name_of(&loser.team),
            })
        })
        .collect();

    records.sort_by(|a, b| compare(a.margin, b.margin, largest));
    records.truncate(count);
    Ok(records)
}

/// The highest (or lowest) single-week scores in the filtered history.
pub fn week_scores(
    matchups: &[Matchup],
    directory: &TeamDirectory,
    filter: &HistoryFilter,
    count: usize,
    highest: bool,
) -> Result<Vec<WeekScore>, EngineError> {
    let mut scores: Vec<WeekScore> = filtered(matchups, filter)?
        .into_iter()
        .flat_map(|m| {
            [&m.home, &m.away].map(|side| WeekScore {
                year: m.year,
                week: m.week,
                team: directory.name_of(&side.team),
                score: side.score,
            })
        })
        .collect();

    scores.sort_by(|a, b| compare(a.score, b.score, highest));
    scores.truncate(count);
    Ok(scores)
}

/// The best (or worst) team-seasons, measured in standard deviations from
/// the league-average weekly score of the same year.
///
/// A year needs at least two team averages with some spread for the
/// deviation to be defined; degenerate years are skipped.
pub fn season_deviations(
    matchups: &[Matchup],
    directory: &TeamDirectory,
    filter: &HistoryFilter,
    count: usize,
    best: bool,
) -> Result<Vec<SeasonDeviation>, EngineError> {
    let mut by_year: BTreeMap<i32, Vec<&Matchup>> = BTreeMap::new();
    for matchup in filtered(matchups, filter)? {
        by_year.entry(matchup.year).or_default().push(matchup);
    }

    let mut deviations = Vec::new();
    for (year, year_matchups) in by_year {
        let weeks: BTreeSet<u32> = year_matchups.iter().map(|m| m.week).collect();
        let mut totals: HashMap<&TeamId, f64> = HashMap::new();
        for matchup in &year_matchups {
            for side in [&matchup.home, &matchup.away] {
                *totals.entry(&side.team).or_default() += side.score;
            }
        }

        let mut teams: Vec<&TeamId> = totals.keys().copied().collect();
        teams.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        let averages: Vec<f64> = teams
            .iter()
            .map(|team| totals[*team] / weeks.len() as f64)
            .collect();

        let Some(stdev) = sample_stdev(&averages) else {
            continue;
        };
        if stdev == 0.0 {
            continue;
        }
        let league_average = mean(&averages);

        for (team, average) in teams.iter().zip(&averages) {
            deviations.push(SeasonDeviation {
                year,
                team: directory.name_of(team),
                average: *average,
                league_average,
                std_dev_away: (average - league_average) / stdev,
            });
        }
    }

    deviations.sort_by(|a, b| compare(a.std_dev_away, b.std_dev_away, best));
    deviations.truncate(count);
    Ok(deviations)
}

fn compare(a: f64, b: f64, descending: bool) -> Ordering {
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    if descending {
        ord.reverse()
    } else {
        ord
    }
}

/// Apply the year range and playoff filter, validating the range against
/// the years actually present. An empty history passes through untouched.
fn filtered<'a>(
    matchups: &'a [Matchup],
    filter: &HistoryFilter,
) -> Result<Vec<&'a Matchup>, EngineError> {
    let years: Vec<i32> = matchups.iter().map(|m| m.year).collect();
    let Some((&first, &last)) = years.iter().min().zip(years.iter().max()) else {
        return Ok(Vec::new());
    };

    let start = filter.start_year.unwrap_or(first);
    let end = filter.end_year.unwrap_or(last);
    if start > end {
        return Err(EngineError::ReversedYearRange { start, end });
    }
    for bound in [start, end] {
        if bound < first || bound > last {
            return Err(EngineError::YearOutOfRange {
                year: bound,
                first,
                last,
            });
        }
    }

    Ok(matchups
        .iter()
        .filter(|m| (start..=end).contains(&m.year))
        .filter(|m| filter.include_playoffs || !m.playoff)
        .collect())
}
