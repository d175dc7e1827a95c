use serde::{Deserialize, Serialize};

use super::ability::{AbilityKind, Target};

/// How an alien picks its move each turn. Evaluated by
/// [`crate::services::behavior::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Always passes.
    Passive,
    /// Walks toward the nearest reachable crew member and hits it once adjacent.
    ChaseAndAttack,
}

/// The (ability, target) pair a behavior settles on for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub ability: AbilityKind,
    pub target: Option<Target>,
}

impl Decision {
    pub fn pass() -> Self {
        Decision {
            ability: AbilityKind::Pass,
            target: None,
        }
    }
}
