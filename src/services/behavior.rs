//! Alien decision making.
//!
//! A behavior only decides; [`crate::services::abilities::use_ability`]
//! carries the decision out.

use crate::models::ability::{AbilityKind, Target};
use crate::models::actor::{ActorId, Faction};
use crate::models::behavior::{Behavior, Decision};
use crate::models::position::TilePos;
use crate::models::world::World;
use crate::services::pathfinding::Path;

/// Pick the ability and target `actor` will use this turn.
///
/// Never fails: anything unexpected (unknown actor, no reachable crew)
/// degrades to a pass.
pub fn decide(world: &mut World, actor: ActorId) -> Decision {
    let Some(alien) = world.population.get(actor) else {
        return Decision::pass();
    };
    match alien.behavior {
        Some(Behavior::ChaseAndAttack) => chase_and_attack(world, actor),
        Some(Behavior::Passive) | None => Decision::pass(),
    }
}

/// Path from `from` to every crew member, in crew order.
pub fn crew_distances(world: &mut World, from: TilePos) -> Vec<(ActorId, Option<Path>)> {
    let crew: Vec<(ActorId, TilePos)> = world
        .population
        .list(Faction::Crew)
        .iter()
        .map(|c| (c.id, c.tile))
        .collect();

    let finder = world.pathfinder_mut();
    finder.stop_avoiding_all_additional_points();
    crew.into_iter()
        .map(|(id, tile)| (id, finder.find_path(from, tile)))
        .collect()
}

fn chase_and_attack(world: &mut World, actor: ActorId) -> Decision {
    let Some(alien) = world.population.get(actor) else {
        return Decision::pass();
    };
    let (from, can_move, can_melee) = (
        alien.tile,
        alien.can_use(AbilityKind::Move),
        alien.can_use(AbilityKind::Melee),
    );

    // Strictly shorter wins, so ties go to the earlier crew member.
    let mut closest: Option<(ActorId, Path)> = None;
    for (id, path) in crew_distances(world, from) {
        let Some(path) = path else { continue };
        if closest.as_ref().map_or(true, |(_, best)| path.len() < best.len()) {
            closest = Some((id, path));
        }
    }

    let Some((crew_id, path)) = closest else {
        log::debug!("{} sees no reachable crew", actor);
        return Decision::pass();
    };

    match path.len() {
        // The last waypoint is the crew member's own tile; stop one short.
        len if len > 2 && can_move => Decision {
            ability: AbilityKind::Move,
            target: path.get(len - 2).map(|t| Target::Tile(*t)),
        },
        2 if can_melee => Decision {
            ability: AbilityKind::Melee,
            target: Some(Target::Actor(crew_id)),
        },
        _ => Decision::pass(),
    }
}
