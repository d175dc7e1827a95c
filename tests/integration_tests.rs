use shipcrawl::models::actor::Actor;
use shipcrawl::services::abilities::use_ability;
use shipcrawl::{
    AbilityKind, Deck, Faction, GameEngine, GameError, GameEvent, GameState, Outcome, Roster,
    StateKey, TilePos, Transition, World,
};

fn engine(layout: &str) -> GameEngine {
    let world = World::from_deck(Deck::parse(layout).unwrap(), Roster::builtin().unwrap()).unwrap();
    GameEngine::new(world).unwrap()
}

fn events(engine: &mut GameEngine) -> Vec<GameEvent> {
    engine.drain_events().collect()
}

fn entered(events: &[GameEvent], key: StateKey) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::TransitionEnd { to } if *to == key))
        .count()
}

fn names(actors: &[Actor]) -> Vec<&str> {
    actors.iter().map(|a| a.name.as_str()).collect()
}

// Two crew walled off from the aliens so alien turns are always passes.
const WALLED: &str = "\
##########
#C#......#
#Y#...e..#
##########
";

#[test]
fn builtin_deck_starts_a_game() {
    let world = World::from_deck(Deck::builtin().unwrap(), Roster::builtin().unwrap()).unwrap();
    let engine = GameEngine::new(world).unwrap();
    assert_eq!(engine.focused_index(), Some(0));
    assert!(!engine.world().population.crew().is_empty());
    assert!(!engine.world().population.aliens().is_empty());
    assert_eq!(engine.world().population.crew()[0].name, "captain");
}

#[test]
fn crew_focus_advances_then_alien_phase_runs_once() {
    let mut e = engine(WALLED);
    events(&mut e);

    e.select_ability(AbilityKind::Pass).unwrap();
    assert_eq!(e.focused_index(), Some(1));
    let first = events(&mut e);
    assert_eq!(entered(&first, StateKey::FocusAlien), 0);

    e.select_ability(AbilityKind::Pass).unwrap();
    let round = events(&mut e);
    assert_eq!(entered(&round, StateKey::FocusAlien), 1);
    assert_eq!(entered(&round, StateKey::AlienGrowth), 1);
    assert_eq!(e.focused_index(), Some(0));
    assert_eq!(e.state().key(), StateKey::FocusCrew);
}

#[test]
fn captain_moves_then_yeoman_shoots_an_egg() {
    let mut e = engine(
        "\
#########
#C.....e#
#Y...e..#
#########
",
    );
    let yeoman_damage = e.world().population.crew()[1].stats.damage;
    events(&mut e);

    e.select_ability(AbilityKind::Move).unwrap();
    e.click_tile(TilePos::new(2, 1)).unwrap();
    assert_eq!(e.world().population.crew()[0].tile, TilePos::new(2, 1));
    assert_eq!(e.focused_index(), Some(1));
    assert!(events(&mut e).contains(&GameEvent::Log("Captain moved.".to_string())));

    e.select_ability(AbilityKind::Shoot).unwrap();
    e.click_tile(TilePos::new(5, 2)).unwrap();
    let shot = events(&mut e);

    let damaged = shot
        .iter()
        .find_map(|ev| match ev {
            GameEvent::ActorDamaged { amount, .. } => Some(*amount),
            _ => None,
        })
        .unwrap();
    assert_eq!(damaged, yeoman_damage);

    let died = shot
        .iter()
        .position(|ev| {
            matches!(ev, GameEvent::ActorDied { tile, .. } if *tile == TilePos::new(5, 2))
        })
        .unwrap();
    let alien_phase = shot
        .iter()
        .position(|ev| matches!(ev, GameEvent::TransitionEnd { to: StateKey::FocusAlien }))
        .unwrap();
    assert!(died < alien_phase);
    assert_eq!(e.world().population.aliens().len(), 1);
}

#[test]
fn failed_move_retries_the_same_crew_member() {
    let mut e = engine(WALLED);
    e.select_ability(AbilityKind::Move).unwrap();
    // On the other side of the wall.
    e.click_tile(TilePos::new(4, 1)).unwrap();
    assert_eq!(e.focused_index(), Some(0));
    assert_eq!(e.world().population.crew()[0].tile, TilePos::new(1, 1));
}

#[test]
fn cancel_restores_the_exact_focus() {
    let mut e = engine(WALLED);
    e.select_ability(AbilityKind::Pass).unwrap();
    let before = e.state().clone();

    e.select_ability(AbilityKind::Shoot).unwrap();
    assert_eq!(e.state().key(), StateKey::SelectAbility);
    e.cancel().unwrap();

    assert_eq!(e.state(), &before);
    assert_eq!(e.focused_index(), Some(1));
}

#[test]
fn invalid_transition_leaves_state_alone() {
    let mut e = engine(WALLED);
    let before = e.state().clone();
    let err = e.fire(Transition::FocusAlien).unwrap_err();
    assert!(matches!(err, GameError::InvalidTransition { .. }));
    assert_eq!(e.state(), &before);
}

#[test]
fn win_is_reported_exactly_once() {
    let mut e = engine(WALLED);
    assert_eq!(e.update().unwrap(), None);
    events(&mut e);

    let aliens = e.world().population.ids(Faction::Alien);
    for id in aliens {
        e.world_mut().population.remove(id);
    }
    assert_eq!(e.update().unwrap(), Some(Outcome::Won));
    assert_eq!(e.update().unwrap(), Some(Outcome::Won));

    let after = events(&mut e);
    let wins = after.iter().filter(|ev| **ev == GameEvent::GameWon).count();
    assert_eq!(wins, 1);
    assert!(!after.contains(&GameEvent::GameLost));
    assert_eq!(e.state(), &GameState::GameOver { outcome: Outcome::Won });
    assert!(e.select_ability(AbilityKind::Pass).is_err());
}

#[test]
fn loss_is_reported_exactly_once() {
    let mut e = engine(WALLED);
    events(&mut e);
    let crew = e.world().population.ids(Faction::Crew);
    for id in crew {
        e.world_mut().population.remove(id);
    }
    assert_eq!(e.update().unwrap(), Some(Outcome::Lost));
    e.update().unwrap();
    let after = events(&mut e);
    assert_eq!(after.iter().filter(|ev| **ev == GameEvent::GameLost).count(), 1);
    assert_eq!(e.current_actor(), None);
}

#[test]
fn alien_melee_can_end_the_game() {
    let mut e = engine(
        "\
#####
#Ca.#
#####
",
    );
    let captain = e.world().population.crew()[0].id;
    e.world_mut().population.get_mut(captain).unwrap().stats.health = 5;
    events(&mut e);

    e.select_ability(AbilityKind::Pass).unwrap();
    let round = events(&mut e);

    assert!(round.contains(&GameEvent::Log("Adult smacked Captain".to_string())));
    assert_eq!(e.outcome(), Some(Outcome::Lost));
    assert_eq!(round.iter().filter(|ev| **ev == GameEvent::GameLost).count(), 1);
    assert_eq!(entered(&round, StateKey::AlienGrowth), 0);
}

#[test]
fn alien_grows_while_closing_in_then_attacks() {
    let mut e = engine(
        "\
#######
#C...b#
#######
",
    );
    // A blob has one step of movement.
    e.select_ability(AbilityKind::Pass).unwrap();
    let alien = &e.world().population.aliens()[0];
    assert_eq!(alien.tile, TilePos::new(4, 1));
    assert_eq!(alien.name, "young");
    assert_eq!(alien.stats.health, alien.stats.max_health);

    // Young move two and stop beside the captain.
    e.select_ability(AbilityKind::Pass).unwrap();
    let alien = &e.world().population.aliens()[0];
    assert_eq!(alien.tile, TilePos::new(2, 1));
    assert_eq!(alien.name, "adult");
    assert_eq!(e.world().population.crew()[0].stats.health, 150);

    e.select_ability(AbilityKind::Pass).unwrap();
    assert_eq!(e.world().population.crew()[0].stats.health, 130);
    assert!(events(&mut e).contains(&GameEvent::Log("Adult smacked Captain".to_string())));
}

#[test]
fn focus_follows_the_actor_when_an_earlier_crew_member_dies() {
    let mut e = engine(
        "\
########
#CYC#.e#
########
",
    );
    e.select_ability(AbilityKind::Pass).unwrap();
    let yeoman = e.world().population.crew()[1].id;
    assert_eq!(e.current_actor(), Some(yeoman));

    let first = e.world().population.crew()[0].id;
    e.world_mut().population.remove(first);
    assert_eq!(e.focused_index(), Some(0));
    assert_eq!(e.state(), &GameState::FocusCrew { actor: yeoman });

    e.select_ability(AbilityKind::Pass).unwrap();
    assert_eq!(e.focused_index(), Some(1));
    assert_eq!(e.world().population.crew()[1].name, "captain");
}

#[test]
fn newborn_eggs_skip_their_first_growth() {
    let mut e = engine(
        "\
#######
#C#...#
###.a.#
#######
",
    );
    e.select_ability(AbilityKind::Pass).unwrap();
    let log = events(&mut e);
    assert!(log.contains(&GameEvent::Log("Adult laid an egg!".to_string())));

    let aliens = e.world().population.aliens();
    assert_eq!(names(aliens), vec!["adult", "egg"]);
    assert_eq!(aliens[1].tile, TilePos::new(5, 2));
    assert!(!aliens[1].just_born);

    e.select_ability(AbilityKind::Pass).unwrap();
    let aliens = e.world().population.aliens();
    assert_eq!(names(aliens), vec!["adult", "blob", "egg"]);
    assert_eq!(aliens[2].tile, TilePos::new(3, 2));
}

#[test]
fn population_cap_stops_egg_laying() {
    let mut e = engine(
        "\
#############
#C#a........#
#Y#eeeeeeeee#
#############
",
    );
    assert_eq!(e.world().population.aliens().len(), 10);

    let adult = e.world().population.aliens()[0].id;
    let result = use_ability(e.world_mut(), adult, AbilityKind::Grow, None);
    assert!(matches!(result, Err(GameError::PopulationCap(10))));
    assert_eq!(e.world().population.aliens().len(), 10);

    e.select_ability(AbilityKind::Pass).unwrap();
    e.select_ability(AbilityKind::Pass).unwrap();
    let round = events(&mut e);
    assert_eq!(e.world().population.aliens().len(), 10);
    assert!(!round.contains(&GameEvent::Log("Adult laid an egg!".to_string())));
    assert!(round.contains(&GameEvent::Log("Egg hatched!".to_string())));
}

#[test]
fn unknown_ability_id_is_rejected() {
    let mut e = engine(WALLED);
    assert!(matches!(
        e.select_ability_by_id("teleport"),
        Err(GameError::UnknownAbility(_))
    ));
    assert_eq!(e.state().key(), StateKey::FocusCrew);
}
