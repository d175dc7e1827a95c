//! Projectile resolution for the Shoot ability.
//!
//! A shot is a bounded wait: it resolves as a hit, a miss, or a timeout once
//! the deadline passes. Nothing here sleeps; flight time is computed.

use std::time::Duration;

use crate::models::position::TilePos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
    /// The projectile was still in flight at the deadline and was discarded.
    TimedOut,
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

pub trait Ballistics {
    fn fire(&mut self, from: TilePos, to: TilePos, deadline: Duration) -> ShotOutcome;
}

/// Flies straight at a fixed speed, through walls. Hits whenever it arrives
/// before the deadline.
#[derive(Debug, Clone, Copy)]
pub struct StraightShot {
    /// Tiles per second.
    pub speed: f64,
}

impl StraightShot {
    pub fn new(speed: f64) -> Self {
        StraightShot { speed }
    }

    pub fn flight_time(&self, from: TilePos, to: TilePos) -> Option<Duration> {
        if self.speed <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(from.distance(to) / self.speed).ok()
    }
}

impl Ballistics for StraightShot {
    fn fire(&mut self, from: TilePos, to: TilePos, deadline: Duration) -> ShotOutcome {
        match self.flight_time(from, to) {
            Some(t) if t <= deadline => ShotOutcome::Hit,
            _ => ShotOutcome::TimedOut,
        }
    }
}
