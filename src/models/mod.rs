//! Domain models
//!
//! Tiles, the ship map, actors and their abilities, the population and the
//! static roster. Effects that change these live in [`crate::services`].

pub mod ability;
pub mod actor;
pub mod behavior;
pub mod constants;
pub mod errors;
pub mod population;
pub mod position;
pub mod roster;
pub mod ship_map;
pub mod world;
