//! Shipcrawl
//!
//! Turn-based tactics on a starship deck: a small crew against an alien
//! population that keeps growing and laying eggs.
//!
//! # Overview
//!
//! Crew members act one at a time in list order, then every alien takes its
//! turn, then aliens grow. The game is won when the last alien dies and lost
//! when the last crew member does.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn/ability state machine and its event stream
//! - [`models`] - Tiles, ship map, actors, abilities, population, roster
//! - [`services`] - Ability effects, alien behavior and growth, pathfinding,
//!   ballistics, console loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Console presenters
//!
//! # Example
//!
//! ```rust,no_run
//! use shipcrawl::{AbilityKind, GameEngine, Roster, Deck, World};
//!
//! let world = World::from_deck(Deck::builtin()?, Roster::builtin()?)?;
//! let mut engine = GameEngine::new(world)?;
//! engine.select_ability(AbilityKind::Pass)?;
//! for event in engine.drain_events() {
//!     println!("{:?}", event);
//! }
//! # Ok::<(), shipcrawl::GameError>(())
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameEvent, GameState, Outcome, StateKey, Transition};
pub use models::ability::{AbilityKind, AbilityRegistry, Target};
pub use models::actor::{ActorId, Faction};
pub use models::errors::{GameError, GameResult};
pub use models::position::TilePos;
pub use models::roster::Roster;
pub use models::ship_map::Deck;
pub use models::world::World;
