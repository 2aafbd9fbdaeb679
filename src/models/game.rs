//! Match, Stage, MatchStatus and MatchScore for scheduled and played games.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Namespace for deterministic (UUIDv5) match ids. Regenerating the same
/// structure from the same input must yield identical matches, ids included.
const MATCH_ID_NAMESPACE: Uuid = Uuid::from_u128(0x8c3e1b526d1f4a079e44d2b053c9a611);

/// Which side of a match won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// Phase of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Round-robin pool play.
    Pool,
    /// Play-in round trimming the field to bracket size.
    PlayIn,
    /// Single-elimination playoff round (1 = first round).
    Playoff(u32),
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Pool => write!(f, "POOL"),
            Stage::PlayIn => write!(f, "PLAYIN"),
            Stage::Playoff(round) => write!(f, "PLAYOFF_R{}", round),
        }
    }
}

/// Lifecycle status of a match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Created by the scheduler or bracket generator; no result yet.
    #[default]
    Scheduled,
    /// Final score recorded.
    Completed,
    /// One real team, no opponent; the team auto-advances.
    Bye,
}

/// Recorded final score. Sides map to `team_a` / `team_b`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub a: u32,
    pub b: u32,
}

impl MatchScore {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Winning side, or None for a level score.
    pub fn winner(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A single match: two sides, a stage tag, and a round number within the stage.
///
/// Side order is meaningful for play-in slot numbering and bracket display,
/// not for game rules.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a: TeamId,
    /// None for a bye (synthetic opponent).
    pub team_b: Option<TeamId>,
    /// None until a result is recorded.
    pub score: Option<MatchScore>,
    pub stage: Stage,
    /// 1-based round number within the stage.
    pub round: u32,
    pub status: MatchStatus,
}

impl Match {
    /// Create a scheduled match between two teams.
    pub fn new(team_a: TeamId, team_b: TeamId, stage: Stage, round: u32) -> Self {
        Self {
            id: deterministic_id(stage, round, team_a, Some(team_b)),
            team_a,
            team_b: Some(team_b),
            score: None,
            stage,
            round,
            status: MatchStatus::Scheduled,
        }
    }

    /// Create a bye: `team` advances without playing this round.
    pub fn bye(team: TeamId, stage: Stage, round: u32) -> Self {
        Self {
            id: deterministic_id(stage, round, team, None),
            team_a: team,
            team_b: None,
            score: None,
            stage,
            round,
            status: MatchStatus::Bye,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.status == MatchStatus::Bye
    }

    /// Whether the given team is a participant.
    pub fn involves(&self, team: TeamId) -> bool {
        self.team_a == team || self.team_b == Some(team)
    }

    /// Record the final score and mark the match completed. No effect on a bye.
    pub fn record_score(&mut self, score: MatchScore) {
        if self.status == MatchStatus::Bye {
            return;
        }
        self.score = Some(score);
        self.status = MatchStatus::Completed;
    }

    /// Winning team: the real team of a bye, or the side with the higher
    /// recorded score. None while scheduled or for a level score.
    pub fn winner(&self) -> Option<TeamId> {
        match self.status {
            MatchStatus::Bye => Some(self.team_a),
            MatchStatus::Completed => match self.score.and_then(|s| s.winner()) {
                Some(Side::A) => Some(self.team_a),
                Some(Side::B) => self.team_b,
                None => None,
            },
            MatchStatus::Scheduled => None,
        }
    }
}

fn deterministic_id(stage: Stage, round: u32, team_a: TeamId, team_b: Option<TeamId>) -> MatchId {
    let name = match team_b {
        Some(b) => format!("{}:{}:{}:{}", stage, round, team_a, b),
        None => format!("{}:{}:{}:bye", stage, round, team_a),
    };
    Uuid::new_v5(&MATCH_ID_NAMESPACE, name.as_bytes())
}

/// Round-robin scheduling configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinConfig {
    /// How many times each pair of pool-mates meets (1 = single round robin,
    /// 2 = double with sides swapped on the return leg).
    pub meetings: u32,
}

impl Default for RoundRobinConfig {
    fn default() -> Self {
        Self { meetings: 1 }
    }
}
