//! Bracket tree and play-in resolution values.

use crate::models::division::EngineError;
use crate::models::game::Match;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// A node in a single-elimination bracket.
///
/// The tree is immutable and owned outright: leaves are first-round matches
/// (or byes), internal nodes are later-round slots fed by the winners of
/// their children, and the root is the final.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketNode {
    /// A first-round match, possibly a bye.
    Match(Match),
    /// A slot in round `round`, fed by the winners of `left` and `right`.
    Round {
        round: u32,
        left: Box<BracketNode>,
        right: Box<BracketNode>,
    },
}

impl BracketNode {
    /// Total number of rounds in the bracket rooted here (1 for a lone match).
    pub fn rounds(&self) -> u32 {
        match self {
            BracketNode::Match(_) => 1,
            BracketNode::Round { round, .. } => *round,
        }
    }

    /// First-round matches in bracket order (top of the draw first).
    pub fn first_round(&self) -> Vec<&Match> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Match>) {
        match self {
            BracketNode::Match(m) => out.push(m),
            BracketNode::Round { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

/// Outcome of play-in resolution for a qualifying field.
///
/// `auto_qualified` holds the directly qualified teams in seed order
/// (seeds 1..=auto_qualified.len()); the winner of `matches[i]` takes seed
/// `auto_qualified.len() + i + 1`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayInRound {
    pub auto_qualified: Vec<TeamId>,
    pub matches: Vec<Match>,
}

impl PlayInRound {
    /// Whether a play-in round is actually required.
    pub fn is_needed(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Assemble the full bracket seed list from the play-in winners.
    ///
    /// `winners[i]` must be a participant of `matches[i]`; a play-in winner
    /// keeps the seed slot its pre-play-in rank predicted.
    pub fn seeded_field(&self, winners: &[TeamId]) -> Result<Vec<TeamId>, EngineError> {
        if winners.len() != self.matches.len() {
            return Err(EngineError::WrongNumberOfWinners {
                needed: self.matches.len(),
                got: winners.len(),
            });
        }
        for (m, &w) in self.matches.iter().zip(winners) {
            if !m.involves(w) {
                return Err(EngineError::TeamNotFound(w));
            }
        }
        let mut field = self.auto_qualified.clone();
        field.extend_from_slice(winners);
        Ok(field)
    }
}
