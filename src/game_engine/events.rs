//! Notifications the engine raises for whatever presentation layer is attached.

use super::state::{StateKey, Transition};
use crate::models::actor::{ActorId, Faction};
use crate::models::position::TilePos;
use crate::services::ballistics::ShotOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// `None` when nobody holds focus (between phases).
    FocusChanged { actor: Option<ActorId> },
    TransitionBegin {
        from: StateKey,
        to: StateKey,
        data: Transition,
    },
    TransitionEnd { to: StateKey },
    /// A line for the in-game log.
    Log(String),
    /// The actor walked `path`, starting tile first.
    ActorMoved { actor: ActorId, path: Vec<TilePos> },
    ShotFired {
        actor: ActorId,
        target: TilePos,
        outcome: ShotOutcome,
    },
    ActorDamaged {
        actor: ActorId,
        amount: i32,
        remaining: i32,
    },
    ActorDied {
        actor: ActorId,
        faction: Faction,
        name: String,
        tile: TilePos,
    },
    ActorSpawned { actor: ActorId, tile: TilePos },
    /// An alien advanced to the named life stage.
    ActorGrew { actor: ActorId, stage: String },
    GameWon,
    GameLost,
}
