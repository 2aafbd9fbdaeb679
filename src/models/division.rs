//! Division, merge records, and engine errors.

use crate::models::game::{Match, MatchId};
use crate::models::team::{Pool, Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a division.
pub type DivisionId = Uuid;

/// Errors that can occur during engine operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// A match marked completed has no recorded score.
    IncompleteData(MatchId),
    /// Field size cannot be reconciled with the requested bracket size.
    InvalidFieldSize { field: usize, bracket: usize },
    /// Bracket size is not a power of two (or is below 2).
    InvalidBracketSize(usize),
    /// Unmerge requested on a division with no active merge record.
    NotMerged(DivisionId),
    /// Merge requested on a division already part of an active merge.
    AlreadyMerged(DivisionId),
    /// A referenced team does not exist in the given context.
    TeamNotFound(TeamId),
    /// Wrong number of play-in winners supplied for the seeded field.
    WrongNumberOfWinners { needed: usize, got: usize },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::IncompleteData(id) => {
                write!(f, "Match {} is marked completed but has no score", id)
            }
            EngineError::InvalidFieldSize { field, bracket } => {
                write!(
                    f,
                    "Field of {} teams cannot fill a bracket of {} (choose a different bracket size)",
                    field, bracket
                )
            }
            EngineError::InvalidBracketSize(size) => {
                write!(f, "Bracket size {} is not a power of two", size)
            }
            EngineError::NotMerged(id) => {
                write!(f, "Division {} has no active merge record", id)
            }
            EngineError::AlreadyMerged(id) => {
                write!(f, "Division {} is already part of an active merge", id)
            }
            EngineError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            EngineError::WrongNumberOfWinners { needed, got } => {
                write!(f, "Expected {} play-in winners, got {}", needed, got)
            }
        }
    }
}

/// An independently scheduled group of teams within a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
    /// Teams in registration order (the final standings tie-break key).
    pub teams: Vec<Team>,
    /// Pools partitioning round-robin play, ordered by their `order` index.
    pub pools: Vec<Pool>,
    /// Present while this division is a temporary union of two others.
    pub merge: Option<MergedDivisionLink>,
}

impl Division {
    /// Create a new empty division.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            teams: Vec::new(),
            pools: Vec::new(),
            merge: None,
        }
    }

    /// Create a division with initial teams and pools.
    pub fn with_teams(name: impl Into<String>, teams: Vec<Team>, pools: Vec<Pool>) -> Self {
        Self {
            teams,
            pools,
            ..Self::new(name)
        }
    }

    pub fn contains_team(&self, team: TeamId) -> bool {
        self.teams.iter().any(|t| t.id == team)
    }
}

/// Record that a division is a temporary union of two source divisions.
///
/// The sources are snapshotted by value at merge time so that unmerge can
/// restore team and pool membership exactly as it was.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MergedDivisionLink {
    pub source_a: Box<Division>,
    pub source_b: Box<Division>,
}

/// Matches recorded while merged, re-attached to the restored divisions.
///
/// A match whose participants end up in different restored divisions cannot
/// be attributed to either and is returned in `cross`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchPartition {
    pub a: Vec<Match>,
    pub b: Vec<Match>,
    pub cross: Vec<Match>,
}
