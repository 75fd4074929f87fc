//! Multi-season standings aggregation.

use super::EngineError;
use crate::models::{RecordTotals, StandingsTable, TeamSeasons, TeamStanding};

/// Fold per-team season records into a standings table for a year range.
///
/// The range is inclusive; `None` covers every known season. Bounds must
/// lie within the known season list and run forwards. `active_only`
/// keeps only owners with a record in the most recent known season.
/// Owners with no season inside the range are omitted; the rest keep
/// their input order. Stored records are never mutated; per-year cells
/// are copies carrying the champion flags for display.
pub fn standings(
    teams: &[TeamSeasons],
    range: Option<(i32, i32)>,
    active_only: bool,
) -> Result<StandingsTable, EngineError> {
    let mut known: Vec<i32> = teams
        .iter()
        .flat_map(|t| t.seasons.iter().map(|s| s.year))
        .collect();
    known.sort_unstable();
    known.dedup();

    let Some((&first, &last)) = known.first().zip(known.last()) else {
        return Ok(StandingsTable {
            seasons: Vec::new(),
            teams: Vec::new(),
        });
    };

    let (start, end) = range.unwrap_or((first, last));
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

    let seasons: Vec<i32> = known
        .iter()
        .copied()
        .filter(|y| (start..=end).contains(y))
        .collect();

    let rows = teams
        .iter()
        .filter(|team| !active_only || team.seasons.iter().any(|s| s.year == last))
        .filter_map(|team| {
            let mut in_range: Vec<_> = team
                .seasons
                .iter()
                .filter(|s| (start..=end).contains(&s.year))
                .cloned()
                .collect();
            if in_range.is_empty() {
                return None;
            }
            in_range.sort_by_key(|s| s.year);

            let mut totals = RecordTotals::default();
            for season in &in_range {
                totals.add(season);
            }

            Some(TeamStanding {
                owner: team.owner.clone(),
                name: team.name.clone(),
                totals,
                seasons: in_range,
            })
        })
        .collect();

    Ok(StandingsTable {
        seasons,
        teams: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OwnerId, SeasonRecord};
    use pretty_assertions::assert_eq;

    fn team(owner: &str, seasons: Vec<SeasonRecord>) -> TeamSeasons {
        TeamSeasons {
            owner: OwnerId::from(owner),
            name: owner.to_string(),
            seasons,
        }
    }

    #[test]
    fn test_totals_across_years() {
        let teams = vec![team(
            "joe",
            vec![
                SeasonRecord::new(2020, 8, 5, 1),
                SeasonRecord::new(2021, 10, 3, 0),
            ],
        )];

        let table = standings(&teams, None, false).unwrap();
        assert_eq!(table.seasons, vec![2020, 2021]);
        let row = &table.teams[0];
        assert_eq!(row.totals.wins, 18);
        assert_eq!(row.totals.losses, 8);
        assert_eq!(row.totals.ties, 1);
        assert_eq!(row.seasons.len(), 2);
    }

    #[test]
    fn test_range_restricts_totals() {
        let teams = vec![team(
            "joe",
            vec![
                SeasonRecord::new(2019, 4, 9, 0),
                SeasonRecord::new(2020, 8, 5, 0),
                SeasonRecord::new(2021, 10, 3, 0),
            ],
        )];

        let table = standings(&teams, Some((2020, 2021)), false).unwrap();
        assert_eq!(table.seasons, vec![2020, 2021]);
        assert_eq!(table.teams[0].totals.wins, 18);
        assert_eq!(table.teams[0].seasons.len(), 2);
    }

    #[test]
    fn test_reversed_range_is_error() {
        let teams = vec![team("joe", vec![SeasonRecord::new(2020, 1, 1, 0)])];
        let err = standings(&teams, Some((2021, 2020)), false).unwrap_err();
        assert_eq!(
            err,
            EngineError::ReversedYearRange {
                start: 2021,
                end: 2020,
            }
        );
    }

    #[test]
    fn test_out_of_range_bound_is_error() {
        let teams = vec![team("joe", vec![SeasonRecord::new(2020, 1, 1, 0)])];
        let err = standings(&teams, Some((2018, 2020)), false).unwrap_err();
        assert_eq!(
            err,
            EngineError::YearOutOfRange {
                year: 2018,
                first: 2020,
                last: 2020,
            }
        );
    }

    #[test]
    fn test_active_only_filter() {
        let teams = vec![
            team(
                "active",
                vec![
                    SeasonRecord::new(2020, 5, 8, 0),
                    SeasonRecord::new(2021, 7, 6, 0),
                ],
            ),
            team("departed", vec![SeasonRecord::new(2020, 9, 4, 0)]),
        ];

        let all = standings(&teams, None, false).unwrap();
        assert_eq!(all.teams.len(), 2);

        let active = standings(&teams, None, true).unwrap();
        assert_eq!(active.teams.len(), 1);
        assert_eq!(active.teams[0].name, "active");
    }

    #[test]
    fn test_no_seasons_in_range_drops_row() {
        let teams = vec![
            team("old", vec![SeasonRecord::new(2019, 6, 7, 0)]),
            team("new", vec![SeasonRecord::new(2021, 7, 6, 0)]),
        ];
        let table = standings(&teams, Some((2021, 2021)), false).unwrap();
        assert_eq!(table.teams.len(), 1);
        assert_eq!(table.teams[0].name, "new");
    }

    #[test]
    fn test_ties_only_win_pct_undefined() {
        let teams = vec![team("tied", vec![SeasonRecord::new(2020, 0, 0, 14)])];
        let table = standings(&teams, None, false).unwrap();
        assert_eq!(table.teams[0].totals.win_pct, None);
    }

    #[test]
    fn test_champion_flags_survive() {
        let mut season = SeasonRecord::new(2020, 12, 1, 0);
        season.reg_season_champ = true;
        season.playoff_champ = true;
        let table = standings(&[team("champ", vec![season])], None, false).unwrap();
        assert!(table.teams[0].seasons[0].playoff_champ);
    }

    #[test]
    fn test_empty_input() {
        let table = standings(&[], None, false).unwrap();
        assert!(table.seasons.is_empty());
        assert!(table.teams.is_empty());
    }
}
