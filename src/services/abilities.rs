//! Ability effects.
//!
//! [`use_ability`] is the single side-effecting entry point. `Ok(())` means
//! the action took effect; an `Err` is a failed action the caller may retry.

use crate::game_engine::GameEvent;
use crate::models::ability::{AbilityKind, Target};
use crate::models::actor::ActorId;
use crate::models::errors::{GameError, GameResult};
use crate::models::position::TilePos;
use crate::models::world::World;
use crate::services::growth;

/// Run `kind` for `actor` against `target`.
pub fn use_ability(
    world: &mut World,
    actor: ActorId,
    kind: AbilityKind,
    target: Option<Target>,
) -> GameResult<()> {
    let user = world.population.actor(actor)?;
    if !user.can_use(kind) {
        return Err(GameError::AbilityNotAvailable {
            actor: user.display_name.clone(),
            ability: kind.id().to_string(),
        });
    }

    match kind {
        AbilityKind::Move => move_to(world, actor, target),
        AbilityKind::Shoot => shoot(world, actor, target),
        AbilityKind::Melee => melee(world, actor, target),
        AbilityKind::Grow => growth::grow(world, actor),
        AbilityKind::Pass | AbilityKind::Inspire | AbilityKind::FindWeakness => Ok(()),
    }
}

fn target_tile(world: &World, target: Option<Target>) -> GameResult<TilePos> {
    match target {
        Some(Target::Tile(tile)) => Ok(tile),
        Some(Target::Actor(id)) => Ok(world.population.actor(id)?.tile),
        None => Err(GameError::InvalidTarget),
    }
}

/// Walk toward the target tile, at most `movement` steps this turn.
fn move_to(world: &mut World, actor: ActorId, target: Option<Target>) -> GameResult<()> {
    let dest = target_tile(world, target)?;
    let (from, movement) = {
        let a = world.population.actor(actor)?;
        (a.tile, a.stats.movement.max(0) as usize)
    };

    let occupied = world.population.occupied_tiles();
    let finder = world.pathfinder_mut();
    finder.stop_avoiding_all_additional_points();
    for tile in occupied {
        finder.avoid_additional_point(tile);
    }
    let path = finder.find_path(from, dest);
    finder.stop_avoiding_all_additional_points();

    let path = match path {
        Some(p) if !p.is_empty() => p,
        _ => return Err(GameError::NoPathFound { from, to: dest }),
    };

    let steps = (path.len() - 1).min(movement);
    let walked: Vec<TilePos> = path.into_iter().take(steps + 1).collect();
    if let Some(&end) = walked.last() {
        world.population.actor_mut(actor)?.tile = end;
    }
    world.emit(GameEvent::ActorMoved {
        actor,
        path: walked,
    });
    Ok(())
}

/// Fire at an opposing actor on the target tile. Damage lands only on a hit.
fn shoot(world: &mut World, actor: ActorId, target: Option<Target>) -> GameResult<()> {
    let tile = target_tile(world, target)?;
    let (from, faction, damage) = {
        let a = world.population.actor(actor)?;
        (a.tile, a.faction, a.stats.damage)
    };

    let victims = world.population.occupants(faction.opponent(), tile);
    let victim = match victims.as_slice() {
        [] => return Err(GameError::NoTargetAtTile(tile)),
        [one] => one.id,
        _ => return Err(GameError::AmbiguousTarget(tile)),
    };

    let deadline = world.shot_deadline();
    let outcome = world.ballistics_mut().fire(from, tile, deadline);
    world.emit(GameEvent::ShotFired {
        actor,
        target: tile,
        outcome,
    });
    if !outcome.is_hit() {
        return Err(GameError::ShotMissed(tile));
    }
    world.hit(victim, damage)?;
    Ok(())
}

/// Hit an adjacent opponent for the attacker's damage.
fn melee(world: &mut World, actor: ActorId, target: Option<Target>) -> GameResult<()> {
    let (from, faction, damage) = {
        let a = world.population.actor(actor)?;
        (a.tile, a.faction, a.stats.damage)
    };
    let victim = match target {
        Some(Target::Actor(id)) => world.population.actor(id)?,
        Some(Target::Tile(tile)) => world
            .population
            .occupants(faction.opponent(), tile)
            .first()
            .copied()
            .ok_or(GameError::NoTargetAtTile(tile))?,
        None => return Err(GameError::InvalidTarget),
    };
    if victim.faction == faction || !from.is_adjacent(victim.tile) {
        return Err(GameError::InvalidTarget);
    }
    let victim = victim.id;
    world.hit(victim, damage)?;
    Ok(())
}
