//! Play-in resolution: trim an arbitrary qualifying field to bracket size.

use crate::models::{EngineError, Match, PlayInRound, Stage, Standing, TeamId};

/// Decide whether a field of ranked teams needs a play-in round to reach
/// `bracket_size`, and pair it if so.
///
/// With `N` teams and bracket size `B` (a power of two):
/// - `N >= 2B` is rejected: the configuration must choose a larger bracket.
/// - `N <= B` needs no play-in; the whole field qualifies in rank order and
///   the bracket generator pads the open positions with byes.
/// - `B < N < 2B` sends the top `N - 2E` teams straight through
///   (`E = N - B`) and pairs the bottom `2E` teams symmetrically inward:
///   best of the group against worst of the group, producing `E` matches.
///   Two teams from the group's top half are never paired together. The
///   winner of match `i` keeps the seed slot its pre-play-in rank predicted.
pub fn resolve_play_in(
    standings: &[Standing],
    bracket_size: usize,
) -> Result<PlayInRound, EngineError> {
    if bracket_size < 2 || !bracket_size.is_power_of_two() {
        return Err(EngineError::InvalidBracketSize(bracket_size));
    }
    let field = standings.len();
    if field >= 2 * bracket_size {
        return Err(EngineError::InvalidFieldSize {
            field,
            bracket: bracket_size,
        });
    }

    let mut by_rank: Vec<&Standing> = standings.iter().collect();
    by_rank.sort_by_key(|s| s.rank);
    let ranked: Vec<TeamId> = by_rank.into_iter().map(|s| s.team).collect();

    if field <= bracket_size {
        log::debug!("field of {} fits bracket of {}, no play-in", field, bracket_size);
        return Ok(PlayInRound {
            auto_qualified: ranked,
            matches: Vec::new(),
        });
    }

    let excess = field - bracket_size;
    let auto = field - 2 * excess;
    let group = &ranked[auto..];
    let matches: Vec<Match> = (0..excess)
        .map(|i| Match::new(group[i], group[2 * excess - 1 - i], Stage::PlayIn, 1))
        .collect();

    log::debug!(
        "play-in: {} auto-qualify, {} matches fill the last {} bracket slots",
        auto,
        matches.len(),
        excess
    );
    Ok(PlayInRound {
        auto_qualified: ranked[..auto].to_vec(),
        matches,
    })
}
