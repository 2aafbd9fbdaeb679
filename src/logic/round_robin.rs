//! Round-robin scheduling: rotation-based pool schedules with rotating byes.

use crate::models::{Match, Pool, PoolId, RoundRobinConfig, Stage, Team, TeamId};
use std::collections::HashSet;

/// Generate a single round-robin schedule (each pair of pool-mates meets once).
pub fn generate_round_robin(teams: &[Team], pools: &[Pool]) -> Vec<Match> {
    generate_round_robin_with_config(teams, pools, &RoundRobinConfig::default())
}

/// Generate a round-robin schedule for a division.
///
/// Teams are grouped by pool (pools taken in `order`; teams with no pool or
/// an unknown pool id form one trailing group; an empty pool list means the
/// whole division plays as one pool). Cross-pool matches are never
/// generated. Output is ordered pool by pool, round by round, and is a pure
/// function of the input ordering.
pub fn generate_round_robin_with_config(
    teams: &[Team],
    pools: &[Pool],
    config: &RoundRobinConfig,
) -> Vec<Match> {
    let mut groups: Vec<Vec<TeamId>> = Vec::new();
    if pools.is_empty() {
        groups.push(teams.iter().map(|t| t.id).collect());
    } else {
        let mut ordered: Vec<&Pool> = pools.iter().collect();
        ordered.sort_by_key(|p| p.order);
        let known: HashSet<PoolId> = ordered.iter().map(|p| p.id).collect();
        for pool in &ordered {
            groups.push(
                teams
                    .iter()
                    .filter(|t| t.pool == Some(pool.id))
                    .map(|t| t.id)
                    .collect(),
            );
        }
        let unassigned: Vec<TeamId> = teams
            .iter()
            .filter(|t| t.pool.map_or(true, |p| !known.contains(&p)))
            .map(|t| t.id)
            .collect();
        if !unassigned.is_empty() {
            groups.push(unassigned);
        }
    }

    let mut matches = Vec::new();
    for group in &groups {
        matches.extend(pool_schedule(group, config));
    }
    log::debug!(
        "generated {} pool matches across {} pool(s)",
        matches.len(),
        groups.len()
    );
    matches
}

/// Circle method: fix the first slot, rotate the rest; slot `i` plays slot
/// `n-1-i`. Odd pool sizes get a phantom slot whose opponent receives a bye
/// that round, so byes rotate through the pool.
fn pool_schedule(members: &[TeamId], config: &RoundRobinConfig) -> Vec<Match> {
    if members.len() < 2 {
        // A lone team has nobody to play and no round to sit out of.
        return Vec::new();
    }
    let mut slots: Vec<Option<TeamId>> = members.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    let rounds_per_cycle = (n - 1) as u32;

    let mut matches = Vec::new();
    for cycle in 0..config.meetings {
        let mut arrangement = slots.clone();
        for r in 0..rounds_per_cycle {
            let round = cycle * rounds_per_cycle + r + 1;
            for i in 0..n / 2 {
                match (arrangement[i], arrangement[n - 1 - i]) {
                    (Some(a), Some(b)) => {
                        // Return legs swap sides.
                        let m = if cycle % 2 == 0 {
                            Match::new(a, b, Stage::Pool, round)
                        } else {
                            Match::new(b, a, Stage::Pool, round)
                        };
                        matches.push(m);
                    }
                    (Some(t), None) | (None, Some(t)) => {
                        matches.push(Match::bye(t, Stage::Pool, round));
                    }
                    (None, None) => {}
                }
            }
            arrangement[1..].rotate_right(1);
        }
    }
    matches
}
