//! Static species and rules configuration.
//!
//! Loaded once at startup from JSON and never mutated afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ability::AbilityKind;
use super::actor::Faction;
use super::behavior::Behavior;
use super::constants::{ALIEN_POPULATION_CAP, PROJECTILE_SPEED, SHOT_DEADLINE_MS};
use super::errors::{GameError, GameResult};

const BUILTIN_ROSTER: &str = include_str!("../../data/roster.json");

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: i32,
    pub damage: i32,
    pub movement: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub display: String,
    pub abilities: Vec<AbilityKind>,
    #[serde(default)]
    pub behavior: Option<Behavior>,
    pub stats: BaseStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionTable {
    /// Abilities every species of the faction gets.
    #[serde(default)]
    pub base_abilities: Vec<AbilityKind>,
    pub species: BTreeMap<String, SpeciesEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default = "default_alien_cap")]
    pub alien_cap: usize,
    #[serde(default = "default_shot_deadline_ms")]
    pub shot_deadline_ms: u64,
    #[serde(default = "default_projectile_speed")]
    pub projectile_speed: f64,
}

fn default_alien_cap() -> usize {
    ALIEN_POPULATION_CAP
}

fn default_shot_deadline_ms() -> u64 {
    SHOT_DEADLINE_MS
}

fn default_projectile_speed() -> f64 {
    PROJECTILE_SPEED
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            alien_cap: ALIEN_POPULATION_CAP,
            shot_deadline_ms: SHOT_DEADLINE_MS,
            projectile_speed: PROJECTILE_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub rules: Rules,
    pub crew: FactionTable,
    pub alien: FactionTable,
}

impl Roster {
    /// The roster compiled into the binary.
    pub fn builtin() -> GameResult<Self> {
        Self::from_json(BUILTIN_ROSTER)
    }

    pub fn from_json(text: &str) -> GameResult<Self> {
        let roster: Roster = serde_json::from_str(text)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn table(&self, faction: Faction) -> &FactionTable {
        match faction {
            Faction::Crew => &self.crew,
            Faction::Alien => &self.alien,
        }
    }

    pub fn species(&self, faction: Faction, name: &str) -> GameResult<&SpeciesEntry> {
        self.table(faction)
            .species
            .get(name)
            .ok_or_else(|| GameError::UnknownSpecies {
                faction,
                name: name.to_string(),
            })
    }

    /// Stats must be playable, and eggs must exist so adults can lay them.
    fn validate(&self) -> GameResult<()> {
        for (name, entry) in self.crew.species.iter().chain(self.alien.species.iter()) {
            let stats = entry.stats;
            let reason = if stats.health <= 0 {
                Some(format!("health {} must be positive", stats.health))
            } else if stats.damage < 0 {
                Some(format!("damage {} must not be negative", stats.damage))
            } else if stats.movement < 0 {
                Some(format!("movement {} must not be negative", stats.movement))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(GameError::InvalidStats {
                    name: name.clone(),
                    reason,
                });
            }
        }

        if self.alien.species.contains_key("adult") && !self.alien.species.contains_key("egg") {
            return Err(GameError::UnknownSpecies {
                faction: Faction::Alien,
                name: "egg".to_string(),
            });
        }
        Ok(())
    }
}
