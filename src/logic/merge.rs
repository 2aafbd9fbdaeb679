//! Division merge/unmerge: union two divisions behind a membership snapshot.

use crate::models::{Division, EngineError, Match, MatchPartition, MergedDivisionLink};
use uuid::Uuid;

/// Namespace for deterministic (UUIDv5) merged-division ids.
const DIVISION_ID_NAMESPACE: Uuid = Uuid::from_u128(0x41d7a9c0f3b24e6b8a15c07d9e62f834);

/// Union two divisions into one scheduling unit.
///
/// The new division carries both team lists (registration order preserved,
/// `a` first), both pool lists with ordering indexes reassigned
/// sequentially, and a snapshot of the two sources so the merge is exactly
/// reversible. Fails with `AlreadyMerged` if either side is already part of
/// an active merge.
pub fn merge_divisions(a: &Division, b: &Division) -> Result<Division, EngineError> {
    if a.merge.is_some() {
        return Err(EngineError::AlreadyMerged(a.id));
    }
    if b.merge.is_some() {
        return Err(EngineError::AlreadyMerged(b.id));
    }

    let mut teams = a.teams.clone();
    teams.extend(b.teams.iter().cloned());
    let mut pools = a.pools.clone();
    pools.extend(b.pools.iter().cloned());
    for (i, p) in pools.iter_mut().enumerate() {
        p.order = i as u32;
    }

    log::debug!(
        "merging division {} ({} teams) with {} ({} teams)",
        a.name,
        a.teams.len(),
        b.name,
        b.teams.len()
    );
    Ok(Division {
        id: Uuid::new_v5(
            &DIVISION_ID_NAMESPACE,
            format!("{}:{}", a.id, b.id).as_bytes(),
        ),
        name: format!("{} / {}", a.name, b.name),
        teams,
        pools,
        merge: Some(MergedDivisionLink {
            source_a: Box::new(a.clone()),
            source_b: Box::new(b.clone()),
        }),
    })
}

/// Restore the two source divisions from a merged division's snapshot.
///
/// Team and pool membership come back exactly as they were at merge time.
/// Fails with `NotMerged` if the division carries no merge record.
pub fn unmerge_division(merged: &Division) -> Result<(Division, Division), EngineError> {
    let link = merged
        .merge
        .as_ref()
        .ok_or(EngineError::NotMerged(merged.id))?;
    Ok(((*link.source_a).clone(), (*link.source_b).clone()))
}

/// Re-attach matches recorded while merged to the restored divisions.
///
/// A match belongs to a division when every participant does; matches
/// spanning the two divisions land in `cross` for the caller to adjudicate.
pub fn partition_matches(matches: &[Match], a: &Division, b: &Division) -> MatchPartition {
    let mut part = MatchPartition {
        a: Vec::new(),
        b: Vec::new(),
        cross: Vec::new(),
    };
    for m in matches {
        let in_a = a.contains_team(m.team_a) && m.team_b.map_or(true, |t| a.contains_team(t));
        let in_b = b.contains_team(m.team_a) && m.team_b.map_or(true, |t| b.contains_team(t));
        if in_a {
            part.a.push(m.clone());
        } else if in_b {
            part.b.push(m.clone());
        } else {
            part.cross.push(m.clone());
        }
    }
    part
}
