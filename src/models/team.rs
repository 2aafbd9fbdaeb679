//! Team and Pool data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// Unique identifier for a pool.
pub type PoolId = Uuid;

/// A registered team in a division.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Pool assignment for round-robin play. None = the division's implicit pool.
    pub pool: Option<PoolId>,
    /// Seed assigned by the engine from standings rank. None until playoffs are set.
    pub seed: Option<u32>,
}

impl Team {
    /// Create a new team with the given name, no pool, no seed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pool: None,
            seed: None,
        }
    }

    /// Create a new team assigned to a pool.
    pub fn with_pool(name: impl Into<String>, pool: PoolId) -> Self {
        Self {
            pool: Some(pool),
            ..Self::new(name)
        }
    }
}

/// A named subset of a division's teams for round-robin play.
/// Pools partition pool-stage scheduling; cross-pool matches are never generated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    /// Ordering index among the division's pools.
    pub order: u32,
}

impl Pool {
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            order,
        }
    }
}
