//! Game services
//!
//! Ability effects, alien decisions and growth, plus the pathfinding and
//! ballistics collaborators they lean on and the console game loop.

pub mod abilities;
pub mod ballistics;
pub mod behavior;
pub mod game;
pub mod growth;
pub mod pathfinding;
