//! Standings: accumulate records from completed matches and rank deterministically.

use crate::models::{
    EngineError, Match, MatchStatus, Side, Standing, Team, TeamId, TieBreakPolicy, TieBreakRule,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compute ranked standings with the default tie-break policy
/// (win percentage, then point differential, then points for).
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Result<Vec<Standing>, EngineError> {
    compute_standings_with_policy(teams, matches, &TieBreakPolicy::default())
}

/// Compute ranked standings from completed matches.
///
/// Every team in `teams` gets a standing; teams with no completed matches
/// rank after all teams that have played, in registration order. Within the
/// played group ties are broken by `policy`, then by registration order, so
/// ranks are always a total order and repeated calls are idempotent.
///
/// Fails with `IncompleteData` if a match is marked completed without a
/// score, and `TeamNotFound` if a completed match references a team absent
/// from `teams`. Byes and scheduled matches contribute nothing.
pub fn compute_standings_with_policy(
    teams: &[Team],
    matches: &[Match],
    policy: &TieBreakPolicy,
) -> Result<Vec<Standing>, EngineError> {
    let registration: HashMap<TeamId, usize> =
        teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

    let mut records: Vec<Standing> = teams
        .iter()
        .map(|t| Standing {
            team: t.id,
            played: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            rank: 0,
        })
        .collect();

    for m in matches {
        if m.status != MatchStatus::Completed {
            continue;
        }
        let score = m.score.ok_or(EngineError::IncompleteData(m.id))?;
        let Some(team_b) = m.team_b else { continue };
        let idx_a = *registration
            .get(&m.team_a)
            .ok_or(EngineError::TeamNotFound(m.team_a))?;
        let idx_b = *registration
            .get(&team_b)
            .ok_or(EngineError::TeamNotFound(team_b))?;

        {
            let rec = &mut records[idx_a];
            rec.played += 1;
            rec.points_for += score.a;
            rec.points_against += score.b;
        }
        {
            let rec = &mut records[idx_b];
            rec.played += 1;
            rec.points_for += score.b;
            rec.points_against += score.a;
        }
        match score.winner() {
            Some(Side::A) => {
                records[idx_a].wins += 1;
                records[idx_b].losses += 1;
            }
            Some(Side::B) => {
                records[idx_b].wins += 1;
                records[idx_a].losses += 1;
            }
            // A level score counts toward played and points only.
            None => {}
        }
    }

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&x, &y| compare_records(&records[x], &records[y], policy).then(x.cmp(&y)));

    let mut standings: Vec<Standing> = order
        .into_iter()
        .map(|i| records[i].clone())
        .collect();
    for (i, s) in standings.iter_mut().enumerate() {
        s.rank = (i + 1) as u32;
    }

    log::debug!(
        "computed standings for {} teams over {} matches",
        teams.len(),
        matches.len()
    );
    Ok(standings)
}

/// Write standings ranks into `Team::seed` for the teams present in both lists.
pub fn assign_seeds(teams: &mut [Team], standings: &[Standing]) {
    for s in standings {
        if let Some(t) = teams.iter_mut().find(|t| t.id == s.team) {
            t.seed = Some(s.rank);
        }
    }
}

/// Policy keys only; the caller appends registration order as the final key.
fn compare_records(x: &Standing, y: &Standing, policy: &TieBreakPolicy) -> Ordering {
    // Teams that have played always rank ahead of teams that have not.
    let mut ord = (y.played > 0).cmp(&(x.played > 0));
    for rule in &policy.rules {
        if ord != Ordering::Equal {
            return ord;
        }
        ord = match rule {
            // Win percentage descending, compared by cross-multiplication so
            // the comparator stays exact and total.
            TieBreakRule::WinPercentage => {
                let lhs = u64::from(y.wins) * u64::from(x.played);
                let rhs = u64::from(x.wins) * u64::from(y.played);
                lhs.cmp(&rhs)
            }
            TieBreakRule::PointDifferential => y.point_diff().cmp(&x.point_diff()),
            TieBreakRule::PointsFor => y.points_for.cmp(&x.points_for),
        };
    }
    ord
}
