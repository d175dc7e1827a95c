//! Console front-end: reads commands, drives the engine, prints what happened.

use std::fs;
use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::Args;
use crate::game_engine::{GameEngine, GameEvent, GameState, Outcome};
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::errors::{GameError, GameResult};
use crate::models::position::TilePos;
use crate::models::roster::Roster;
use crate::models::ship_map::Deck;
use crate::models::world::World;
use crate::ui::presenters::{DeckPresenter, EventPresenter};

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ability(String),
    Tile(TilePos),
    Cancel,
    Help,
    Quit,
    Redraw,
}

impl Command {
    pub fn parse(line: &str) -> GameResult<Command> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Ok(Command::Redraw),
            [x, y] => Ok(Command::Tile(TilePos::new(x.parse()?, y.parse()?))),
            [word] => Ok(match word.to_ascii_lowercase().as_str() {
                "q" | "quit" => Command::Quit,
                "help" | "?" => Command::Help,
                "cancel" | "c" => Command::Cancel,
                other => Command::Ability(other.to_string()),
            }),
            _ => Err(GameError::InvalidInput(format!("unrecognised command {:?}", line))),
        }
    }
}

/// Build the world from command-line options, falling back to the built-in
/// roster and deck.
pub fn build_world(args: &Args) -> GameResult<World> {
    let roster = match &args.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::builtin()?,
    };
    let mut deck = match &args.deck {
        Some(path) => Deck::parse(&fs::read_to_string(path)?)?,
        None => Deck::builtin()?,
    };

    if args.debris > 0 {
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let keep_clear: Vec<TilePos> = deck.placements.iter().map(|p| p.tile).collect();
        let placed = deck.map.scatter_debris(&mut rng, args.debris, &keep_clear);
        log::info!("scattered {} debris tiles (seed {})", placed.len(), seed);
    }

    World::from_deck(deck, roster)
}

pub struct Game {
    engine: GameEngine,
    input: Box<dyn InputReader>,
    output: Box<dyn OutputWriter>,
}

impl Game {
    pub fn new(args: &Args) -> GameResult<Self> {
        let engine = GameEngine::new(build_world(args)?)?;
        Ok(Self::with_io(engine, Box::new(TerminalIO), Box::new(TerminalIO)))
    }

    pub fn with_io(
        engine: GameEngine,
        input: Box<dyn InputReader>,
        output: Box<dyn OutputWriter>,
    ) -> Self {
        Game {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until one side is wiped out, the player quits, or input ends.
    pub fn run(&mut self) -> GameResult<Option<Outcome>> {
        self.print_briefing();
        self.flush_events();
        let mut redraw = true;

        loop {
            if let Some(outcome) = self.engine.update()? {
                self.flush_events();
                return Ok(Some(outcome));
            }
            if redraw {
                self.print_focus();
            }

            let prompt = self.prompt();
            let line = match self.input.read_line(prompt) {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            redraw = true;
            let command = match Command::parse(&line) {
                Ok(Command::Quit) => {
                    self.output.writeln("ABANDONING SHIP.");
                    return Ok(None);
                }
                Ok(command) => command,
                Err(e) => {
                    self.output.writeln(&format!("Error: {}", e));
                    redraw = false;
                    continue;
                }
            };
            if let Err(e) = self.execute(command) {
                self.output.writeln(&format!("Error: {}", e));
                redraw = false;
            }
            self.flush_events();
        }
    }

    fn execute(&mut self, command: Command) -> GameResult<()> {
        match command {
            Command::Ability(id) => self.engine.select_ability_by_id(&id),
            Command::Tile(tile) => self.engine.click_tile(tile),
            Command::Cancel => self.engine.cancel(),
            Command::Help => {
                DeckPresenter::show_help(self.output.as_mut());
                Ok(())
            }
            Command::Redraw | Command::Quit => Ok(()),
        }
    }

    fn prompt(&self) -> &'static str {
        match self.engine.state() {
            GameState::SelectAbility { .. } => "TARGET (X Y)?",
            _ => "COMMAND?",
        }
    }

    fn print_briefing(&mut self) {
        let population = &self.engine.world().population;
        let crew = population.crew().len();
        let aliens = population.aliens().len();
        self.output.writeln(&format!(
            "YOUR {} CREW MUST CLEAR {} ALIENS FROM THE DECK BEFORE THEY OVERRUN IT",
            crew, aliens,
        ));
    }

    fn print_focus(&mut self) {
        match self.engine.state() {
            GameState::FocusCrew { actor } => {
                DeckPresenter::show_deck(self.engine.world(), self.output.as_mut());
                if let Some(crew) = self.engine.world().population.get(*actor) {
                    DeckPresenter::show_actor(crew, self.output.as_mut());
                }
            }
            GameState::SelectAbility { ability } => {
                if let Some(help) = ability.descriptor().help_text {
                    self.output.writeln(help);
                }
            }
            _ => {}
        }
    }

    fn flush_events(&mut self) {
        let events: Vec<GameEvent> = self.engine.drain_events().collect();
        for event in &events {
            EventPresenter::show(event, self.output.as_mut());
        }
    }
}
