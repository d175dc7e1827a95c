use proptest::prelude::*;
use shipcrawl::models::ability::AbilitySet;
use shipcrawl::models::ship_map::ShipMap;
use shipcrawl::services::abilities::use_ability;
use shipcrawl::services::pathfinding::{GridPathfinder, Pathfinder};
use shipcrawl::{
    AbilityKind, Deck, Faction, GameEngine, GameEvent, Roster, StateKey, TilePos, World,
};

fn open_finder(width: i32, height: i32) -> GridPathfinder {
    let map = ShipMap::open(width, height);
    let mut finder = GridPathfinder::new();
    finder.set_grid(map.walkability_grid());
    finder.set_acceptable_tiles(&ShipMap::acceptable_codes());
    finder
}

fn any_kind() -> impl Strategy<Value = AbilityKind> {
    prop::sample::select(AbilityKind::ALL.to_vec())
}

proptest! {
    /// Property: on open floor a path is a shortest chain of adjacent tiles
    #[test]
    fn open_floor_paths_are_shortest(
        fx in 0..8i32, fy in 0..8i32, tx in 0..8i32, ty in 0..8i32,
    ) {
        let mut finder = open_finder(8, 8);
        let (from, to) = (TilePos::new(fx, fy), TilePos::new(tx, ty));
        let path = finder.find_path(from, to).unwrap();

        if from == to {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path.len() as i32, from.manhattan(to) + 1);
            prop_assert_eq!(path[0], from);
            prop_assert_eq!(*path.last().unwrap(), to);
            for pair in path.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]));
            }
        }
    }

    /// Property: avoided points never appear in a path
    #[test]
    fn avoided_points_are_never_walked(
        ax in 0..6i32, ay in 0..6i32, tx in 0..6i32, ty in 0..6i32,
    ) {
        let mut finder = open_finder(6, 6);
        let avoided = TilePos::new(ax, ay);
        let from = TilePos::new(0, 0);
        prop_assume!(avoided != from);
        finder.avoid_additional_point(avoided);

        if let Some(path) = finder.find_path(from, TilePos::new(tx, ty)) {
            prop_assert!(!path.contains(&avoided));
        }
    }

    /// Property: composed ability sets hold every id once
    #[test]
    fn composed_sets_have_no_duplicates(
        base in prop::collection::vec(any_kind(), 0..7),
        variant in prop::collection::vec(any_kind(), 0..7),
    ) {
        let set = AbilitySet::compose(&base, &variant);
        let ids: Vec<&str> = set.iter().map(|a| a.id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(ids.len(), unique.len());
        for kind in base.iter().chain(variant.iter()) {
            prop_assert!(set.contains(*kind));
        }
    }

    /// Property: damage never leaves negative health
    #[test]
    fn health_never_goes_negative(hits in prop::collection::vec(0..200i32, 1..10)) {
        let deck = Deck::parse("####\n#Ca#\n####\n").unwrap();
        let mut world = World::from_deck(deck, Roster::builtin().unwrap()).unwrap();
        let id = world.population.aliens()[0].id;
        for dmg in hits {
            if world.population.get(id).is_none() {
                break;
            }
            let report = world.hit(id, dmg).unwrap();
            prop_assert!(report.remaining >= 0);
        }
    }

    /// Property: repeated egg laying never passes the population cap
    #[test]
    fn egg_laying_respects_the_cap(attempts in 1usize..30) {
        let layout = "\
##########
#C#......#
###......#
###..a...#
###......#
##########
";
        let deck = Deck::parse(layout).unwrap();
        let mut world = World::from_deck(deck, Roster::builtin().unwrap()).unwrap();
        let cap = world.roster.rules.alien_cap;
        for _ in 0..attempts {
            for id in world.population.ids(Faction::Alien) {
                let _ = use_ability(&mut world, id, AbilityKind::Grow, None);
            }
            prop_assert!(world.population.list(Faction::Alien).len() <= cap);
        }
    }

    /// Property: the alien phase runs once per full round of crew actions
    #[test]
    fn alien_phase_once_per_round(passes in 0usize..12) {
        let layout = "\
#######
#C#...#
#Y#.e.#
#C#...#
#######
";
        let deck = Deck::parse(layout).unwrap();
        let world = World::from_deck(deck, Roster::builtin().unwrap()).unwrap();
        let mut engine = GameEngine::new(world).unwrap();
        for _ in 0..passes {
            engine.select_ability(AbilityKind::Pass).unwrap();
        }
        let phases = engine
            .drain_events()
            .filter(|e| matches!(e, GameEvent::TransitionEnd { to: StateKey::FocusAlien }))
            .count();
        prop_assert_eq!(phases, passes / 3);
        prop_assert_eq!(engine.focused_index(), Some(passes % 3));
    }
}
