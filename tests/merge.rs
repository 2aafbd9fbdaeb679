//! Integration tests for division merge/unmerge: snapshots, restore, partition.

use std::collections::HashSet;
use tournament_engine::{
    generate_round_robin, merge_divisions, partition_matches, unmerge_division, Division,
    EngineError, Match, MatchScore, Pool, Stage, Team, TeamId,
};

fn division(name: &str, team_count: usize) -> Division {
    let teams: Vec<Team> = (0..team_count)
        .map(|i| Team::new(format!("{name}-{i}")))
        .collect();
    Division::with_teams(name, teams, Vec::new())
}

fn ids(d: &Division) -> HashSet<TeamId> {
    d.teams.iter().map(|t| t.id).collect()
}

#[test]
fn merge_unions_teams_and_records_link() {
    let a = division("East", 4);
    let b = division("West", 3);
    let merged = merge_divisions(&a, &b).unwrap();
    assert_eq!(merged.teams.len(), 7);
    let union: HashSet<TeamId> = ids(&a).union(&ids(&b)).copied().collect();
    assert_eq!(ids(&merged), union);
    let link = merged.merge.as_ref().unwrap();
    assert_eq!(link.source_a.id, a.id);
    assert_eq!(link.source_b.id, b.id);
}

#[test]
fn merge_is_deterministic() {
    let a = division("East", 2);
    let b = division("West", 2);
    let once = merge_divisions(&a, &b).unwrap();
    let twice = merge_divisions(&a, &b).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn merged_division_schedules_as_one_unit() {
    let a = division("East", 2);
    let b = division("West", 2);
    let merged = merge_divisions(&a, &b).unwrap();
    let matches = generate_round_robin(&merged.teams, &merged.pools);
    // 4 teams, one unit: every pair including cross-division ones.
    assert_eq!(matches.len(), 6);
}

#[test]
fn merge_then_unmerge_restores_membership_exactly() {
    let pool_a = Pool::new("A1", 0);
    let mut a = division("East", 3);
    a.pools = vec![pool_a.clone()];
    a.teams[0].pool = Some(pool_a.id);
    let b = division("West", 4);

    let merged = merge_divisions(&a, &b).unwrap();
    let (restored_a, restored_b) = unmerge_division(&merged).unwrap();
    assert_eq!(restored_a, a);
    assert_eq!(restored_b, b);
    assert_eq!(restored_a.teams[0].pool, Some(pool_a.id));
}

#[test]
fn merged_pools_are_reindexed() {
    let mut a = division("East", 2);
    a.pools = vec![Pool::new("A1", 0), Pool::new("A2", 1)];
    let mut b = division("West", 2);
    b.pools = vec![Pool::new("B1", 0)];
    let merged = merge_divisions(&a, &b).unwrap();
    let orders: Vec<u32> = merged.pools.iter().map(|p| p.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert_eq!(merged.pools[2].name, "B1");
}

#[test]
fn unmerge_without_link_fails() {
    let plain = division("East", 3);
    assert!(matches!(
        unmerge_division(&plain),
        Err(EngineError::NotMerged(id)) if id == plain.id
    ));
}

#[test]
fn double_merge_is_rejected() {
    let a = division("East", 2);
    let b = division("West", 2);
    let c = division("North", 2);
    let merged = merge_divisions(&a, &b).unwrap();
    assert!(matches!(
        merge_divisions(&merged, &c),
        Err(EngineError::AlreadyMerged(id)) if id == merged.id
    ));
    assert!(matches!(
        merge_divisions(&c, &merged),
        Err(EngineError::AlreadyMerged(id)) if id == merged.id
    ));
}

#[test]
fn partition_reattaches_results_to_their_divisions() {
    let a = division("East", 2);
    let b = division("West", 2);
    let merged = merge_divisions(&a, &b).unwrap();

    let mut in_a = Match::new(a.teams[0].id, a.teams[1].id, Stage::Pool, 1);
    in_a.record_score(MatchScore::new(15, 10));
    let mut in_b = Match::new(b.teams[0].id, b.teams[1].id, Stage::Pool, 1);
    in_b.record_score(MatchScore::new(9, 12));
    let mut cross = Match::new(a.teams[0].id, b.teams[1].id, Stage::Pool, 2);
    cross.record_score(MatchScore::new(7, 5));

    let (restored_a, restored_b) = unmerge_division(&merged).unwrap();
    let part = partition_matches(&[in_a.clone(), in_b.clone(), cross.clone()], &restored_a, &restored_b);
    assert_eq!(part.a, vec![in_a]);
    assert_eq!(part.b, vec![in_b]);
    assert_eq!(part.cross, vec![cross]);
}
