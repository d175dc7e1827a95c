//! User interface and presentation
//!
//! Presenters turn the world and the engine's events into console text,
//! keeping formatting out of the rules.

pub mod presenters;
