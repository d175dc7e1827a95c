use std::fmt;

use crate::models::ability::{AbilityKind, Target};
use crate::models::actor::ActorId;

/// Tag of a [`GameState`], used to key transitions and the state cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    FocusCrew,
    SelectAbility,
    UseAbility,
    FocusAlien,
    AlienGrowth,
    GameOver,
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StateKey::FocusCrew => "FOCUS_CREW",
            StateKey::SelectAbility => "SELECT_ABILITY",
            StateKey::UseAbility => "USE_ABILITY",
            StateKey::FocusAlien => "FOCUS_ALIEN",
            StateKey::AlienGrowth => "ALIEN_GROWTH",
            StateKey::GameOver => "GAME_OVER",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every alien is dead.
    Won,
    /// Every crew member is dead.
    Lost,
}

/// Where the turn sequencer currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// A crew member is waiting for an ability choice. Held by id so removals
    /// earlier in the crew list cannot shift focus onto someone else.
    FocusCrew { actor: ActorId },
    /// A targetable ability was chosen; waiting for a tile pick or cancel.
    SelectAbility { ability: AbilityKind },
    /// An ability is resolving.
    UseAbility {
        ability: AbilityKind,
        target: Option<Target>,
    },
    FocusAlien,
    AlienGrowth,
    /// Terminal.
    GameOver { outcome: Outcome },
}

impl GameState {
    pub fn key(&self) -> StateKey {
        match self {
            GameState::FocusCrew { .. } => StateKey::FocusCrew,
            GameState::SelectAbility { .. } => StateKey::SelectAbility,
            GameState::UseAbility { .. } => StateKey::UseAbility,
            GameState::FocusAlien => StateKey::FocusAlien,
            GameState::AlienGrowth => StateKey::AlienGrowth,
            GameState::GameOver { .. } => StateKey::GameOver,
        }
    }
}

/// A requested state change and the data it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Focus crew member `index`. `None` restores the cached focus (cancel).
    FocusCrew { index: Option<usize> },
    SelectAbility { ability: AbilityKind },
    UseAbility { target: Option<Target> },
    FocusAlien,
    AlienGrowth,
    GameOver { outcome: Outcome },
}

impl Transition {
    /// The state this transition lands in.
    pub fn key(&self) -> StateKey {
        match self {
            Transition::FocusCrew { .. } => StateKey::FocusCrew,
            Transition::SelectAbility { .. } => StateKey::SelectAbility,
            Transition::UseAbility { .. } => StateKey::UseAbility,
            Transition::FocusAlien => StateKey::FocusAlien,
            Transition::AlienGrowth => StateKey::AlienGrowth,
            Transition::GameOver { .. } => StateKey::GameOver,
        }
    }
}
