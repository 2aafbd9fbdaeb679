//! Tournament structure engine: models and scheduling/bracket logic.
//!
//! A pure, synchronous function library: it receives teams, completed match
//! results and configuration, and returns schedules, standings and bracket
//! trees. Persistence, auth and transport belong to the calling layer.

pub mod logic;
pub mod models;

pub use logic::{
    assign_seeds, compute_standings, compute_standings_with_policy, generate_bracket,
    generate_bracket_padded, generate_round_robin, generate_round_robin_with_config,
    merge_divisions, partition_matches, resolve_play_in, unmerge_division,
};
pub use models::{
    BracketNode, Division, DivisionId, EngineError, Match, MatchId, MatchPartition, MatchScore,
    MatchStatus, MergedDivisionLink, PlayInRound, Pool, PoolId, RoundRobinConfig, Side, Stage,
    Standing, Team, TeamId, TieBreakPolicy, TieBreakRule,
};
