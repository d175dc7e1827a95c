use thiserror::Error;

use super::actor::{ActorId, Faction};
use super::position::TilePos;
use crate::game_engine::StateKey;

/// Game-specific error types.
///
/// Everything here is recoverable. Ability effects report a failed action
/// through `Err`, and the turn sequencer decides whether to retry the turn.
#[derive(Debug, Error)]
pub enum GameError {
    /// No transition is defined from the current state to the requested one
    #[error("invalid state transition {from} -> {to}")]
    InvalidTransition { from: StateKey, to: StateKey },
    /// Ability identifier missing from the registry
    #[error("unknown ability: {0}")]
    UnknownAbility(String),
    /// The acting actor does not own the requested ability
    #[error("{actor} cannot use {ability}")]
    AbilityNotAvailable { actor: String, ability: String },
    #[error("no such actor: {0}")]
    UnknownActor(ActorId),
    #[error("no {faction} species named {name:?} in the roster")]
    UnknownSpecies { faction: Faction, name: String },
    #[error("no path from {from} to {to}")]
    NoPathFound { from: TilePos, to: TilePos },
    #[error("nothing to target at {0}")]
    NoTargetAtTile(TilePos),
    #[error("more than one target at {0}")]
    AmbiguousTarget(TilePos),
    /// Target kind does not suit the ability (or a required target is missing)
    #[error("invalid target")]
    InvalidTarget,
    #[error("shot at {0} missed")]
    ShotMissed(TilePos),
    /// No free adjacent tile to lay an egg on
    #[error("{0} has nowhere to grow")]
    GrowthBlocked(ActorId),
    #[error("alien population cap of {0} reached")]
    PopulationCap(usize),
    #[error("deck layout line {line}: {reason}")]
    MapParse { line: usize, reason: String },
    #[error("bad input: {0}")]
    InvalidInput(String),
    /// A roster entry whose stats cannot be played with
    #[error("species {name:?} has invalid stats: {reason}")]
    InvalidStats { name: String, reason: String },
    #[error("roster config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
