//! Tournament structure logic: standings, scheduling, play-in, brackets, merges.

mod bracket;
mod merge;
mod play_in;
mod round_robin;
mod standings;

pub use bracket::{generate_bracket, generate_bracket_padded};
pub use merge::{merge_divisions, partition_matches, unmerge_division};
pub use play_in::resolve_play_in;
pub use round_robin::{generate_round_robin, generate_round_robin_with_config};
pub use standings::{assign_seeds, compute_standings, compute_standings_with_policy};
