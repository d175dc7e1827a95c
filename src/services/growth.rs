//! Alien life cycle: egg -> blob -> young -> adult, and adults laying eggs.

use crate::game_engine::GameEvent;
use crate::models::actor::{ActorId, Faction, LifeStage};
use crate::models::constants::{offset_tile, GROWTH_OFFSETS};
use crate::models::errors::{GameError, GameResult};
use crate::models::position::TilePos;
use crate::models::world::World;

/// Advance `alien` one life stage, or lay an egg if it is already an adult.
pub fn grow(world: &mut World, alien: ActorId) -> GameResult<()> {
    let stage = world
        .population
        .actor(alien)?
        .stage
        .ok_or(GameError::GrowthBlocked(alien))?;

    match stage.next() {
        Some(next) => mature(world, alien, next),
        None => lay_egg(world, alien),
    }
}

fn mature(world: &mut World, alien: ActorId, next: LifeStage) -> GameResult<()> {
    let entry = world.roster.species(Faction::Alien, next.name())?;
    world
        .population
        .actor_mut(alien)?
        .become_species(next.name(), entry, &world.roster.alien.base_abilities);
    world.emit(GameEvent::ActorGrew {
        actor: alien,
        stage: next.name().to_string(),
    });
    Ok(())
}

fn lay_egg(world: &mut World, parent: ActorId) -> GameResult<()> {
    let cap = world.roster.rules.alien_cap;
    if world.population.aliens().len() >= cap {
        return Err(GameError::PopulationCap(cap));
    }
    let origin = world.population.actor(parent)?.tile;
    let spot = find_growth_spot(world, origin).ok_or(GameError::GrowthBlocked(parent))?;

    let egg = world
        .population
        .spawn(&world.roster, Faction::Alien, LifeStage::Egg.name(), spot)?;
    world.population.actor_mut(egg)?.just_born = true;
    log::info!("alien {} laid egg {} at {}", parent, egg, spot);
    world.emit(GameEvent::ActorSpawned {
        actor: egg,
        tile: spot,
    });
    Ok(())
}

/// First orthogonal neighbour of `origin` that is open floor and unoccupied.
pub fn find_growth_spot(world: &World, origin: TilePos) -> Option<TilePos> {
    GROWTH_OFFSETS
        .iter()
        .map(|offset| offset_tile(origin, *offset))
        .find(|tile| !world.map.collides(*tile) && !world.population.is_occupied(*tile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ability::AbilityKind;
    use crate::models::roster::Roster;
    use crate::models::ship_map::Deck;

    fn world(layout: &str) -> World {
        World::from_deck(Deck::parse(layout).unwrap(), Roster::builtin().unwrap()).unwrap()
    }

    fn first_alien(world: &World) -> ActorId {
        world.population.aliens()[0].id
    }

    #[test]
    fn egg_hatches_into_blob_with_blob_stats() {
        let mut w = world("#####\n#.e.#\n#####\n");
        let egg = first_alien(&w);
        grow(&mut w, egg).unwrap();

        let blob = w.population.actor(egg).unwrap();
        assert_eq!(blob.name, "blob");
        assert_eq!(blob.display_name, "Blob");
        assert_eq!(blob.stats.health, 25);
        assert!(blob.can_use(AbilityKind::Melee));
        assert_eq!(blob.stage, Some(LifeStage::Blob));
    }

    #[test]
    fn young_matures_into_adult() {
        let mut w = world("#####\n#.y.#\n#####\n");
        let young = first_alien(&w);
        grow(&mut w, young).unwrap();
        assert_eq!(w.population.actor(young).unwrap().stage, Some(LifeStage::Adult));
    }

    #[test]
    fn adult_lays_egg_east_first() {
        let mut w = world("#####\n#.a.#\n#####\n");
        let adult = first_alien(&w);
        grow(&mut w, adult).unwrap();

        assert_eq!(w.population.aliens().len(), 2);
        let egg = &w.population.aliens()[1];
        assert_eq!(egg.name, "egg");
        assert_eq!(egg.tile, TilePos::new(3, 1));
        assert!(egg.just_born);
        // The adult stays an adult.
        assert_eq!(w.population.actor(adult).unwrap().name, "adult");
    }

    #[test]
    fn search_order_is_east_west_south_north() {
        let w = world("#####\n#Ca.#\n#...#\n#####\n");
        let origin = w.population.aliens()[0].tile;
        // East (3,1) is free.
        assert_eq!(find_growth_spot(&w, origin), Some(TilePos::new(3, 1)));

        let w = world("#####\n#.a##\n#...#\n#####\n");
        let origin = w.population.aliens()[0].tile;
        // East is a wall, west (1,1) is free.
        assert_eq!(find_growth_spot(&w, origin), Some(TilePos::new(1, 1)));

        let w = world("#####\n#Ca##\n#...#\n#####\n");
        let origin = w.population.aliens()[0].tile;
        // East wall, west occupied, south free.
        assert_eq!(find_growth_spot(&w, origin), Some(TilePos::new(2, 2)));
    }

    #[test]
    fn boxed_in_adult_cannot_lay() {
        let mut w = world("#####\n#CaY#\n##.##\n#####\n");
        w.map.set(TilePos::new(2, 2), crate::models::constants::TileKind::Debris);
        let adult = first_alien(&w);
        let result = grow(&mut w, adult);
        assert!(matches!(result, Err(GameError::GrowthBlocked(id)) if id == adult));
        assert_eq!(w.population.aliens().len(), 1);
    }

    #[test]
    fn population_cap_blocks_eleventh_alien() {
        let mut w = world("##############\n#a...........#\n#............#\n##############\n");
        for x in 3..12 {
            w.population
                .spawn(&w.roster, Faction::Alien, "egg", TilePos::new(x, 2))
                .unwrap();
        }
        assert_eq!(w.population.aliens().len(), 10);

        let adult = first_alien(&w);
        let result = grow(&mut w, adult);
        assert!(matches!(result, Err(GameError::PopulationCap(10))));
        assert_eq!(w.population.aliens().len(), 10);
    }

    #[test]
    fn crew_without_stage_cannot_grow() {
        let mut w = world("####\n#C.#\n####\n");
        let captain = w.population.crew()[0].id;
        assert!(matches!(grow(&mut w, captain), Err(GameError::GrowthBlocked(_))));
    }
}
