//! Crew and alien collections.
//!
//! Each actor lives in exactly one of the two ordered lists. List order is
//! turn order. Ids come from a counter owned here and are never reused.

use super::actor::{Actor, ActorId, Faction};
use super::errors::{GameError, GameResult};
use super::position::TilePos;
use super::roster::Roster;

#[derive(Debug, Clone, Default)]
pub struct Population {
    crew: Vec<Actor>,
    aliens: Vec<Actor>,
    next_id: u32,
}

/// Result of applying damage to one actor.
#[derive(Debug, Clone)]
pub struct HitReport {
    pub remaining: i32,
    /// The removed actor when the hit was lethal.
    pub casualty: Option<Actor>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an actor of the named species and append it to its faction's list.
    pub fn spawn(
        &mut self,
        roster: &Roster,
        faction: Faction,
        name: &str,
        tile: TilePos,
    ) -> GameResult<ActorId> {
        let entry = roster.species(faction, name)?;
        let id = ActorId(self.next_id);
        self.next_id += 1;
        let actor = Actor::new(
            id,
            faction,
            name,
            entry,
            &roster.table(faction).base_abilities,
            tile,
        );
        self.list_mut(faction).push(actor);
        Ok(id)
    }

    pub fn crew(&self) -> &[Actor] {
        &self.crew
    }

    pub fn aliens(&self) -> &[Actor] {
        &self.aliens
    }

    pub fn list(&self, faction: Faction) -> &[Actor] {
        match faction {
            Faction::Crew => &self.crew,
            Faction::Alien => &self.aliens,
        }
    }

    fn list_mut(&mut self, faction: Faction) -> &mut Vec<Actor> {
        match faction {
            Faction::Crew => &mut self.crew,
            Faction::Alien => &mut self.aliens,
        }
    }

    pub fn ids(&self, faction: Faction) -> Vec<ActorId> {
        self.list(faction).iter().map(|a| a.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.crew.iter().chain(self.aliens.iter())
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.crew
            .iter_mut()
            .chain(self.aliens.iter_mut())
            .find(|a| a.id == id)
    }

    pub fn actor(&self, id: ActorId) -> GameResult<&Actor> {
        self.get(id).ok_or(GameError::UnknownActor(id))
    }

    pub fn actor_mut(&mut self, id: ActorId) -> GameResult<&mut Actor> {
        self.get_mut(id).ok_or(GameError::UnknownActor(id))
    }

    /// Current position of `id` in its faction's list.
    pub fn index_of(&self, id: ActorId) -> Option<usize> {
        self.crew
            .iter()
            .position(|a| a.id == id)
            .or_else(|| self.aliens.iter().position(|a| a.id == id))
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        for list in [&mut self.crew, &mut self.aliens] {
            if let Some(idx) = list.iter().position(|a| a.id == id) {
                return Some(list.remove(idx));
            }
        }
        None
    }

    /// Any actor standing on `tile`.
    pub fn occupant(&self, tile: TilePos) -> Option<&Actor> {
        self.iter().find(|a| a.tile == tile)
    }

    /// Actors of one faction standing on `tile`.
    pub fn occupants(&self, faction: Faction, tile: TilePos) -> Vec<&Actor> {
        self.list(faction).iter().filter(|a| a.tile == tile).collect()
    }

    pub fn is_occupied(&self, tile: TilePos) -> bool {
        self.occupant(tile).is_some()
    }

    pub fn occupied_tiles(&self) -> Vec<TilePos> {
        self.iter().map(|a| a.tile).collect()
    }

    /// Damage an actor. A lethal hit removes it from its list in the same step.
    pub fn hit(&mut self, id: ActorId, damage: i32) -> GameResult<HitReport> {
        let actor = self.actor_mut(id)?;
        let died = actor.take_hit(damage);
        let remaining = actor.stats.health;
        let casualty = if died { self.remove(id) } else { None };
        Ok(HitReport {
            remaining,
            casualty,
        })
    }

    pub fn is_empty(&self, faction: Faction) -> bool {
        self.list(faction).is_empty()
    }
}
