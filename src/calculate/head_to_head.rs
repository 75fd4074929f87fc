//! Head-to-head record reconstruction from historical matchups.

use super::EngineError;
use crate::models::{HeadToHeadRecord, HeadToHeadSide, Matchup, PairTally, Streak, TeamId};

/// Replay all matchups between two teams into a pairwise record.
///
/// Tallies wins, ties, and points per team, split into regular season and
/// playoffs. One chronological walk over the combined sequence computes
/// the current streak (the run ending at the most recent matchup; a tie
/// breaks any streak) and the longest streak ever held; when two runs
/// tie on length, the most recent one takes the record.
///
/// Every matchup must involve exactly the two given teams. An empty
/// history yields a zeroed record with length-0 streaks.
pub fn head_to_head(
    team1: &TeamId,
    team2: &TeamId,
    matchups: &[Matchup],
) -> Result<HeadToHeadRecord, EngineError> {
    let mut side1 = HeadToHeadSide {
        team: team1.clone(),
        ..Default::default()
    };
    let mut side2 = HeadToHeadSide {
        team: team2.clone(),
        ..Default::default()
    };

    for matchup in matchups {
        for side in [&matchup.home, &matchup.away] {
            if &side.team != team1 && &side.team != team2 {
                return Err(EngineError::UnexpectedTeam {
                    year: matchup.year,
                    week: matchup.week,
                    team: side.team.clone(),
                });
            }
        }
    }

    let mut ordered: Vec<&Matchup> = matchups.iter().collect();
    ordered.sort_by_key(|m| (m.year, m.week));

    let mut regular_matchups = 0;
    let mut playoff_matchups = 0;
    let mut current = Streak::none();
    let mut longest = Streak::none();

    for matchup in &ordered {
        if matchup.playoff {
            playoff_matchups += 1;
        } else {
            regular_matchups += 1;
        }

        for side in [&matchup.home, &matchup.away] {
            let tally = tally_for(&mut side1, &mut side2, &side.team, matchup.playoff);
            tally.points += side.score;
        }

        match matchup.winner() {
            Some(winner) => {
                let tally = tally_for(&mut side1, &mut side2, &winner.team, matchup.playoff);
                tally.wins += 1;

                if current.team.as_ref() == Some(&winner.team) {
                    current.length += 1;
                } else {
                    current = Streak {
                        team: Some(winner.team.clone()),
                        length: 1,
                    };
                }
                if current.length >= longest.length {
                    longest = current.clone();
                }
            }
            None => {
                let t1 = tally_for(&mut side1, &mut side2, team1, matchup.playoff);
                t1.ties += 1;
                let t2 = tally_for(&mut side1, &mut side2, team2, matchup.playoff);
                t2.ties += 1;
                current = Streak::none();
            }
        }
    }

    Ok(HeadToHeadRecord {
        team1: side1,
        team2: side2,
        regular_matchups,
        playoff_matchups,
        current_streak: current,
        longest_streak: longest,
    })
}

fn tally_for<'a>(
    side1: &'a mut HeadToHeadSide,
    side2: &'a mut HeadToHeadSide,
    team: &TeamId,
    playoff: bool,
) -> &'a mut PairTally {
    let side = if team == &side1.team { side1 } else { side2 };
    if playoff {
        &mut side.playoff
    } else {
        &mut side.regular
    }
}
