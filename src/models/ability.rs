//! Ability descriptors and the static ability registry.
//!
//! Abilities are immutable and shared by every actor that owns them. What an
//! ability *does* lives in [`crate::services::abilities`]; this module only
//! describes it and formats its log line.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, LifeStage};
use super::errors::{GameError, GameResult};
use super::position::TilePos;

/// Every ability an actor can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Move,
    Shoot,
    Pass,
    Inspire,
    FindWeakness,
    Melee,
    Grow,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 7] = [
        AbilityKind::Move,
        AbilityKind::Shoot,
        AbilityKind::Pass,
        AbilityKind::Inspire,
        AbilityKind::FindWeakness,
        AbilityKind::Melee,
        AbilityKind::Grow,
    ];

    /// Registry key, as used in the roster file and at the console.
    pub fn id(&self) -> &'static str {
        self.descriptor().id
    }

    pub fn descriptor(&self) -> &'static Ability {
        &ABILITIES[*self as usize]
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What an ability is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Tile(TilePos),
    Actor(ActorId),
}

/// A target as it looked when the ability was chosen, for log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    pub tile: TilePos,
    pub display_name: Option<String>,
}

/// Immutable ability descriptor.
#[derive(Debug, PartialEq, Eq)]
pub struct Ability {
    pub kind: AbilityKind,
    pub id: &'static str,
    pub name: &'static str,
    pub help_text: Option<&'static str>,
    /// Targetable abilities wait for a tile pick; the rest resolve at once.
    pub targetable: bool,
}

/// Indexed by `AbilityKind as usize`.
static ABILITIES: [Ability; 7] = [
    Ability {
        kind: AbilityKind::Move,
        id: "move",
        name: "Move",
        help_text: Some("Click a tile to move to."),
        targetable: true,
    },
    Ability {
        kind: AbilityKind::Shoot,
        id: "shoot",
        name: "Shoot",
        help_text: Some("Choose something to shoot."),
        targetable: true,
    },
    Ability {
        kind: AbilityKind::Pass,
        id: "pass",
        name: "Pass",
        help_text: None,
        targetable: false,
    },
    Ability {
        kind: AbilityKind::Inspire,
        id: "inspire",
        name: "Inspire",
        help_text: None,
        targetable: false,
    },
    Ability {
        kind: AbilityKind::FindWeakness,
        id: "find_weakness",
        name: "Find Weakness",
        help_text: Some("Choose something to analyze"),
        targetable: true,
    },
    Ability {
        kind: AbilityKind::Melee,
        id: "melee",
        name: "Attack",
        help_text: None,
        targetable: true,
    },
    Ability {
        kind: AbilityKind::Grow,
        id: "grow",
        name: "Grow",
        help_text: None,
        targetable: false,
    },
];

/// Lookup into the static ability table.
pub struct AbilityRegistry;

impl AbilityRegistry {
    /// Resolve an ability by its identifier.
    pub fn resolve(id: &str) -> GameResult<&'static Ability> {
        ABILITIES
            .iter()
            .find(|ability| ability.id == id)
            .ok_or_else(|| GameError::UnknownAbility(id.to_string()))
    }

    pub fn all() -> &'static [Ability] {
        &ABILITIES
    }
}

impl Ability {
    /// The log line for `actor` using this ability on `target`.
    pub fn message(&self, actor: &Actor, target: Option<&TargetInfo>) -> String {
        let who = &actor.display_name;
        match self.kind {
            AbilityKind::Move => format!("{} moved.", who),
            AbilityKind::Shoot => match target {
                Some(t) => format!("{} shot at {}.", who, t.tile),
                None => format!("{} shot at nothing.", who),
            },
            AbilityKind::Pass => format!("{} passed.", who),
            AbilityKind::Inspire => format!("{} used Inspire. That feels great.", who),
            AbilityKind::FindWeakness => format!("{} used Find Weakness.", who),
            AbilityKind::Melee => {
                let victim = target
                    .and_then(|t| t.display_name.as_deref())
                    .unwrap_or("thin air");
                format!("{} smacked {}", who, victim)
            }
            AbilityKind::Grow => match actor.stage {
                Some(LifeStage::Adult) => format!("{} laid an egg!", who),
                Some(LifeStage::Egg) => format!("{} hatched!", who),
                Some(LifeStage::Blob) => format!("{} is growing!", who),
                Some(LifeStage::Young) => format!("{} has matured!", who),
                None => format!("{} grew.", who),
            },
        }
    }
}

/// An actor's abilities, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilitySet {
    entries: Vec<&'static Ability>,
}

impl AbilitySet {
    /// Merge a faction's base abilities with a species' own list.
    ///
    /// Order is first appearance. On a key collision the species entry
    /// replaces the base entry in place.
    pub fn compose(base: &[AbilityKind], variant: &[AbilityKind]) -> Self {
        let mut set = AbilitySet::default();
        for kind in base.iter().chain(variant) {
            let ability = kind.descriptor();
            match set.entries.iter_mut().find(|a| a.kind == *kind) {
                Some(slot) => *slot = ability,
                None => set.entries.push(ability),
            }
        }
        set
    }

    pub fn contains(&self, kind: AbilityKind) -> bool {
        self.entries.iter().any(|a| a.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Ability> + '_ {
        self.entries.iter().copied()
    }
}
