//! Single-elimination bracket generation with classic seeded placement.

use crate::models::{BracketNode, EngineError, Match, Stage, TeamId};

/// Build a complete single-elimination bracket for exactly `seeds.len()`
/// teams (seed 1 first). The team count must be a power of two.
pub fn generate_bracket(seeds: &[TeamId]) -> Result<BracketNode, EngineError> {
    if seeds.len() < 2 || !seeds.len().is_power_of_two() {
        return Err(EngineError::InvalidBracketSize(seeds.len()));
    }
    build_tree(seeds, seeds.len())
}

/// Build a bracket of `bracket_size` positions from `seeds.len()` teams,
/// padding the open positions with byes.
///
/// Rejects a bracket more than half empty (`2N < B`): that means the caller
/// picked the wrong size, and the bound guarantees every first-round slot
/// holds at least one real team.
pub fn generate_bracket_padded(
    seeds: &[TeamId],
    bracket_size: usize,
) -> Result<BracketNode, EngineError> {
    if bracket_size < 2 || !bracket_size.is_power_of_two() {
        return Err(EngineError::InvalidBracketSize(bracket_size));
    }
    if seeds.len() > bracket_size || seeds.len() * 2 < bracket_size {
        return Err(EngineError::InvalidFieldSize {
            field: seeds.len(),
            bracket: bracket_size,
        });
    }
    build_tree(seeds, bracket_size)
}

fn build_tree(seeds: &[TeamId], bracket_size: usize) -> Result<BracketNode, EngineError> {
    let order = seeding_order(bracket_size);

    let mut nodes: Vec<BracketNode> = Vec::with_capacity(bracket_size / 2);
    for pair in order.chunks(2) {
        let a = seeds.get(pair[0] - 1).copied();
        let b = seeds.get(pair[1] - 1).copied();
        let node = match (a, b) {
            (Some(a), Some(b)) => BracketNode::Match(Match::new(a, b, Stage::Playoff(1), 1)),
            (Some(t), None) | (None, Some(t)) => {
                BracketNode::Match(Match::bye(t, Stage::Playoff(1), 1))
            }
            (None, None) => {
                return Err(EngineError::InvalidFieldSize {
                    field: seeds.len(),
                    bracket: bracket_size,
                });
            }
        };
        nodes.push(node);
    }

    let mut round = 1;
    while nodes.len() > 1 {
        round += 1;
        let mut next = Vec::with_capacity(nodes.len() / 2);
        let mut iter = nodes.into_iter();
        while let (Some(left), Some(right)) = (iter.next(), iter.next()) {
            next.push(BracketNode::Round {
                round,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        nodes = next;
    }

    log::debug!(
        "generated {}-team bracket, {} round(s)",
        bracket_size,
        round
    );
    Ok(nodes.swap_remove(0))
}

/// Classic tournament seeding permutation, built by doubling:
/// `[1]` -> `[1,2]` -> `[1,4,2,3]` -> `[1,8,4,5,2,7,3,6]` -> ...
///
/// Adjacent pairs are the first-round matches; seed 1 and seed 2 land in
/// opposite halves, recursively within every sub-bracket.
fn seeding_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    let mut n = 1;
    while n < size {
        n *= 2;
        let mut next = Vec::with_capacity(n);
        for &seed in &order {
            next.push(seed);
            next.push(n + 1 - seed);
        }
        order = next;
    }
    order
}
