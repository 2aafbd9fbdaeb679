//! Data structures for the tournament engine: teams, matches, standings, brackets, divisions.

mod bracket;
mod division;
mod game;
mod standing;
mod team;

pub use bracket::{BracketNode, PlayInRound};
pub use division::{Division, DivisionId, EngineError, MatchPartition, MergedDivisionLink};
pub use game::{Match, MatchId, MatchScore, MatchStatus, RoundRobinConfig, Side, Stage};
pub use standing::{Standing, TieBreakPolicy, TieBreakRule};
pub use team::{Pool, PoolId, Team, TeamId};
