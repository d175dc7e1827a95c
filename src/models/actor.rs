use std::fmt;

use serde::{Deserialize, Serialize};

use super::ability::{AbilityKind, AbilitySet};
use super::behavior::Behavior;
use super::position::TilePos;
use super::roster::SpeciesEntry;

/// Stable actor identity, issued by the population and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Crew,
    Alien,
}

impl Faction {
    pub fn opponent(&self) -> Faction {
        match self {
            Faction::Crew => Faction::Alien,
            Faction::Alien => Faction::Crew,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Faction::Crew => f.write_str("crew"),
            Faction::Alien => f.write_str("alien"),
        }
    }
}

/// Alien life cycle. Adults stay adults and lay eggs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Egg,
    Blob,
    Young,
    Adult,
}

impl LifeStage {
    pub fn from_name(name: &str) -> Option<LifeStage> {
        match name {
            "egg" => Some(LifeStage::Egg),
            "blob" => Some(LifeStage::Blob),
            "young" => Some(LifeStage::Young),
            "adult" => Some(LifeStage::Adult),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LifeStage::Egg => "egg",
            LifeStage::Blob => "blob",
            LifeStage::Young => "young",
            LifeStage::Adult => "adult",
        }
    }

    /// The stage this one grows into, or `None` for adults (they spawn).
    pub fn next(&self) -> Option<LifeStage> {
        match self {
            LifeStage::Egg => Some(LifeStage::Blob),
            LifeStage::Blob => Some(LifeStage::Young),
            LifeStage::Young => Some(LifeStage::Adult),
            LifeStage::Adult => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub movement: i32,
}

/// A crew member or alien on the deck.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    /// Species key in the roster ("captain", "adult", ...).
    pub name: String,
    pub display_name: String,
    pub faction: Faction,
    pub tile: TilePos,
    pub stats: Stats,
    pub abilities: AbilitySet,
    /// Aliens only.
    pub behavior: Option<Behavior>,
    pub stage: Option<LifeStage>,
    /// Set on eggs laid this growth phase so they skip one growth check.
    pub just_born: bool,
}

impl Actor {
    pub fn new(
        id: ActorId,
        faction: Faction,
        name: &str,
        entry: &SpeciesEntry,
        base_abilities: &[AbilityKind],
        tile: TilePos,
    ) -> Self {
        let mut actor = Actor {
            id,
            name: String::new(),
            display_name: String::new(),
            faction,
            tile,
            stats: Stats {
                health: 0,
                max_health: 0,
                damage: 0,
                movement: 0,
            },
            abilities: AbilitySet::default(),
            behavior: None,
            stage: None,
            just_born: false,
        };
        actor.become_species(name, entry, base_abilities);
        actor
    }

    /// Take on a species' stats, abilities and behavior. Health resets to the
    /// new maximum.
    pub fn become_species(
        &mut self,
        name: &str,
        entry: &SpeciesEntry,
        base_abilities: &[AbilityKind],
    ) {
        self.name = name.to_string();
        self.display_name = entry.display.clone();
        self.stats = Stats {
            health: entry.stats.health,
            max_health: entry.stats.health,
            damage: entry.stats.damage,
            movement: entry.stats.movement,
        };
        self.abilities = AbilitySet::compose(base_abilities, &entry.abilities);
        self.behavior = entry.behavior;
        self.stage = match self.faction {
            Faction::Alien => LifeStage::from_name(name),
            Faction::Crew => None,
        };
    }

    /// Apply damage. Returns true when this hit killed the actor; stored
    /// health never drops below zero. Negative damage does nothing.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        self.stats.health = (self.stats.health - damage.max(0)).max(0);
        self.stats.health == 0
    }

    pub fn can_use(&self, kind: AbilityKind) -> bool {
        self.abilities.contains(kind)
    }
}
