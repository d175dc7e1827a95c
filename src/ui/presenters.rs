use crate::game_engine::GameEvent;
use crate::io::OutputWriter;
use crate::models::actor::Actor;
use crate::models::constants::species_glyph;
use crate::models::world::World;

pub struct DeckPresenter;

impl DeckPresenter {
    /// Draw the deck with every living actor over its tile.
    pub fn show_deck(world: &World, output: &mut dyn OutputWriter) {
        let width = world.map.width();
        let ruler: String = (0..width).map(|x| char::from(b'0' + (x % 10) as u8)).collect();
        output.writeln(&format!("   {}", ruler));
        for y in 0..world.map.height() {
            let row = world.map.render_row(y, |tile| {
                world
                    .population
                    .occupant(tile)
                    .map(|actor| species_glyph(&actor.name))
            });
            output.writeln(&format!("{:>2} {}", y, row));
        }
    }

    pub fn show_actor(actor: &Actor, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{} at {}  HP {}/{}  DMG {}  MV {}",
            actor.display_name,
            actor.tile,
            actor.stats.health,
            actor.stats.max_health,
            actor.stats.damage,
            actor.stats.movement,
        ));
        for ability in actor.abilities.iter() {
            match ability.help_text {
                Some(help) => output.writeln(&format!("   {:<14}{}", ability.id, help)),
                None => output.writeln(&format!("   {}", ability.id)),
            }
        }
    }

    pub fn show_help(output: &mut dyn OutputWriter) {
        output.writeln("   <ability>  USE AN ABILITY OF THE FOCUSED CREW MEMBER");
        output.writeln("   X Y        PICK A TARGET TILE");
        output.writeln("   CANCEL     BACK OUT OF TARGETING");
        output.writeln("   HELP       SHOW THIS LIST");
        output.writeln("   Q          QUIT");
    }
}

pub struct EventPresenter;

impl EventPresenter {
    /// Print the events a player cares about; the rest are for other front-ends.
    pub fn show(event: &GameEvent, output: &mut dyn OutputWriter) {
        match event {
            GameEvent::Log(line) => output.writeln(line),
            GameEvent::ActorDamaged { amount, remaining, .. } => {
                output.writeln(&format!("   {} DAMAGE ({} LEFT)", amount, (*remaining).max(0)));
            }
            GameEvent::ActorDied { name, tile, .. } => {
                output.writeln(&format!("*** {} DESTROYED AT {} ***", name.to_uppercase(), tile));
            }
            GameEvent::GameWon => Self::show_victory(output),
            GameEvent::GameLost => Self::show_defeat(output),
            _ => {}
        }
    }

    pub fn show_victory(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("THE LAST ALIEN ON THE DECK HAS BEEN DESTROYED");
        output.writeln("THE SHIP IS SAVED !!!");
        output.writeln("");
    }

    pub fn show_defeat(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*** THE CREW HAS BEEN WIPED OUT");
        output.writeln("THE SHIP BELONGS TO THE ALIENS");
        output.writeln("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::actor::{ActorId, Faction};
    use crate::models::position::TilePos;
    use crate::models::roster::Roster;
    use crate::models::ship_map::Deck;

    fn world() -> World {
        World::from_deck(
            Deck::parse("#####\n#C.e#\n#####\n").unwrap(),
            Roster::builtin().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn deck_draws_actors_over_floor() {
        let mut output = MockOutput::new();
        DeckPresenter::show_deck(&world(), &mut output);
        let lines = output.messages();
        assert_eq!(lines[0], "   01234\n");
        assert_eq!(lines[2], " 1 #C.e#\n");
    }

    #[test]
    fn actor_summary_lists_abilities() {
        let w = world();
        let mut output = MockOutput::new();
        DeckPresenter::show_actor(&w.population.crew()[0], &mut output);
        assert!(output.contains("Captain at (1, 1)  HP 150/150  DMG 40  MV 2"));
        assert!(output.contains("move"));
        assert!(output.contains("inspire"));
    }

    #[test]
    fn log_lines_and_deaths_are_printed() {
        let mut output = MockOutput::new();
        EventPresenter::show(&GameEvent::Log("Captain passed.".to_string()), &mut output);
        EventPresenter::show(
            &GameEvent::ActorDied {
                actor: ActorId(3),
                faction: Faction::Alien,
                name: "egg".to_string(),
                tile: TilePos::new(3, 1),
            },
            &mut output,
        );
        assert!(output.contains("Captain passed."));
        assert!(output.contains("*** EGG DESTROYED AT (3, 1) ***"));
    }

    #[test]
    fn transitions_are_not_printed() {
        let mut output = MockOutput::new();
        EventPresenter::show(&GameEvent::FocusChanged { actor: None }, &mut output);
        assert!(output.messages().is_empty());
    }
}
