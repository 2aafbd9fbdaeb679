//! Standing and the configurable tie-break policy.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// A team's derived record: computed fresh from completed matches, never
/// stored as authoritative state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team: TeamId,
    /// Completed matches the team appeared in (draws included).
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    /// 1-based sort position; unique within one standings computation.
    pub rank: u32,
}

impl Standing {
    /// Wins over matches played, 0.0 for a team that has not played.
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.played)
        }
    }

    /// Points for minus points against.
    pub fn point_diff(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}

/// One comparison key in a tie-break policy. All keys sort descending
/// (better record first).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakRule {
    WinPercentage,
    PointDifferential,
    PointsFor,
}

/// Ordered tie-break keys applied between teams that have played.
///
/// Two keys are fixed outside the policy: teams with zero played matches
/// always rank last, and registration order is always the final key, so the
/// resulting order is total no matter what the policy says.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TieBreakPolicy {
    pub rules: Vec<TieBreakRule>,
}

impl Default for TieBreakPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                TieBreakRule::WinPercentage,
                TieBreakRule::PointDifferential,
                TieBreakRule::PointsFor,
            ],
        }
    }
}
