//! Everything an ability or behavior may read or change during a turn.

use std::collections::vec_deque::Drain;
use std::collections::VecDeque;
use std::time::Duration;

use super::ability::{Target, TargetInfo};
use super::actor::ActorId;
use super::errors::GameResult;
use super::population::{HitReport, Population};
use super::roster::Roster;
use super::ship_map::{Deck, ShipMap};
use crate::game_engine::GameEvent;
use crate::services::ballistics::{Ballistics, StraightShot};
use crate::services::pathfinding::{GridPathfinder, Pathfinder};

pub struct World {
    pub map: ShipMap,
    pub population: Population,
    pub roster: Roster,
    pathfinder: Box<dyn Pathfinder>,
    ballistics: Box<dyn Ballistics>,
    events: VecDeque<GameEvent>,
}

impl World {
    /// An empty world over `map` with the bundled pathfinder and ballistics.
    pub fn new(map: ShipMap, roster: Roster) -> Self {
        let ballistics = StraightShot::new(roster.rules.projectile_speed);
        let mut world = World {
            map,
            population: Population::new(),
            roster,
            pathfinder: Box::new(GridPathfinder::new()),
            ballistics: Box::new(ballistics),
            events: VecDeque::new(),
        };
        world.load_grid();
        world
    }

    /// A world populated from a deck layout's placements.
    pub fn from_deck(deck: Deck, roster: Roster) -> GameResult<Self> {
        let mut world = World::new(deck.map, roster);
        for placement in &deck.placements {
            world.population.spawn(
                &world.roster,
                placement.faction,
                &placement.name,
                placement.tile,
            )?;
        }
        Ok(world)
    }

    pub fn with_pathfinder(mut self, pathfinder: Box<dyn Pathfinder>) -> Self {
        self.pathfinder = pathfinder;
        self.load_grid();
        self
    }

    pub fn with_ballistics(mut self, ballistics: Box<dyn Ballistics>) -> Self {
        self.ballistics = ballistics;
        self
    }

    /// Hand the current map to the pathfinder. Call after editing terrain.
    pub fn load_grid(&mut self) {
        self.pathfinder.set_grid(self.map.walkability_grid());
        self.pathfinder.set_acceptable_tiles(&ShipMap::acceptable_codes());
    }

    pub fn pathfinder_mut(&mut self) -> &mut dyn Pathfinder {
        self.pathfinder.as_mut()
    }

    pub fn ballistics_mut(&mut self) -> &mut dyn Ballistics {
        self.ballistics.as_mut()
    }

    pub fn shot_deadline(&self) -> Duration {
        Duration::from_millis(self.roster.rules.shot_deadline_ms)
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn log(&mut self, line: String) {
        self.emit(GameEvent::Log(line));
    }

    /// Snapshot a target for log lines.
    pub fn describe(&self, target: Target) -> Option<TargetInfo> {
        match target {
            Target::Tile(tile) => Some(TargetInfo {
                tile,
                display_name: self.population.occupant(tile).map(|a| a.display_name.clone()),
            }),
            Target::Actor(id) => self.population.get(id).map(|a| TargetInfo {
                tile: a.tile,
                display_name: Some(a.display_name.clone()),
            }),
        }
    }

    /// Apply damage and raise the damage/death notifications.
    pub fn hit(&mut self, id: ActorId, damage: i32) -> GameResult<HitReport> {
        let report = self.population.hit(id, damage)?;
        self.emit(GameEvent::ActorDamaged {
            actor: id,
            amount: damage,
            remaining: report.remaining,
        });
        if let Some(dead) = &report.casualty {
            log::info!("{} {} died at {}", dead.display_name, dead.id, dead.tile);
            self.emit(GameEvent::ActorDied {
                actor: dead.id,
                faction: dead.faction,
                name: dead.name.clone(),
                tile: dead.tile,
            });
        }
        Ok(report)
    }
}
