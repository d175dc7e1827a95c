//! Turn sequencer
//!
//! A finite state machine over [`GameState`]. Crew members act in list order,
//! then every alien acts, then aliens grow, and the round starts again with
//! the first crew member. Every ability resolves completely before the next
//! actor gets focus. Transitions and side effects are reported as
//! [`GameEvent`]s, drained by whatever presentation layer is attached.

mod events;
mod state;

use std::collections::vec_deque::Drain;
use std::collections::HashMap;

pub use events::GameEvent;
pub use state::{GameState, Outcome, StateKey, Transition};

use crate::models::ability::{AbilityKind, AbilityRegistry, Target};
use crate::models::actor::{ActorId, Faction};
use crate::models::errors::{GameError, GameResult};
use crate::models::position::TilePos;
use crate::models::world::World;
use crate::services::{abilities, behavior};

/// Work left over once a transition has landed.
enum Followup {
    Nothing,
    Focus(ActorId),
    /// Run a crew member's ability. `index` is their list position when it started.
    Resolve {
        actor: ActorId,
        index: usize,
        ability: AbilityKind,
        target: Option<Target>,
    },
    AlienPhase,
    GrowthPhase,
    Announce(Outcome),
}

/// Owns the world and the current [`GameState`].
pub struct GameEngine {
    world: World,
    state: GameState,
    /// Last state seen for each tag, so cancel can go back.
    cache: HashMap<StateKey, GameState>,
    /// Whoever currently holds focus, crew or alien.
    current: Option<ActorId>,
}

impl GameEngine {
    /// Start a game focused on the first crew member.
    ///
    /// # Errors
    ///
    /// Fails when the world has no crew to focus.
    pub fn new(world: World) -> GameResult<Self> {
        let first = world
            .population
            .crew()
            .first()
            .map(|a| a.id)
            .ok_or_else(|| GameError::InvalidInput("the deck has no crew".to_string()))?;
        let mut engine = GameEngine {
            world,
            state: GameState::FocusCrew { actor: first },
            cache: HashMap::new(),
            current: Some(first),
        };
        engine.world.emit(GameEvent::FocusChanged { actor: Some(first) });
        Ok(engine)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn current_actor(&self) -> Option<ActorId> {
        self.current
    }

    /// List position of the focused crew member, resolved from its id.
    pub fn focused_index(&self) -> Option<usize> {
        let actor = match &self.state {
            GameState::FocusCrew { actor } => *actor,
            GameState::SelectAbility { .. } | GameState::UseAbility { .. } => self.cached_focus()?,
            _ => return None,
        };
        self.world.population.index_of(actor)
    }

    /// Take every queued notification, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.world.drain_events()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::GameOver { outcome } => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The focused crew member picked an ability.
    pub fn select_ability(&mut self, ability: AbilityKind) -> GameResult<()> {
        if let GameState::FocusCrew { actor } = self.state {
            let crew = self.world.population.actor(actor)?;
            if !crew.can_use(ability) {
                return Err(GameError::AbilityNotAvailable {
                    actor: crew.display_name.clone(),
                    ability: ability.id().to_string(),
                });
            }
        }
        self.fire(Transition::SelectAbility { ability })
    }

    /// Same as [`Self::select_ability`], looked up by registry id.
    pub fn select_ability_by_id(&mut self, id: &str) -> GameResult<()> {
        let ability = AbilityRegistry::resolve(id)?;
        self.select_ability(ability.kind)
    }

    /// A tile was clicked. Only meaningful while an ability awaits a target.
    pub fn click_tile(&mut self, tile: TilePos) -> GameResult<()> {
        match self.state {
            GameState::SelectAbility { .. } => self.fire(Transition::UseAbility {
                target: Some(Target::Tile(tile)),
            }),
            _ => Ok(()),
        }
    }

    /// Back out of target selection. Ignored in every other state.
    pub fn cancel(&mut self) -> GameResult<()> {
        match self.state {
            GameState::SelectAbility { .. } => self.fire(Transition::FocusCrew { index: None }),
            _ => Ok(()),
        }
    }

    /// Frame tick: end the game once either side has been wiped out.
    pub fn update(&mut self) -> GameResult<Option<Outcome>> {
        if let Some(outcome) = self.outcome() {
            return Ok(Some(outcome));
        }
        match self.check_game_end() {
            Some(outcome) => {
                self.fire(Transition::GameOver { outcome })?;
                Ok(Some(outcome))
            }
            None => Ok(None),
        }
    }

    /// Aliens gone is a win; crew gone is a loss.
    pub fn check_game_end(&self) -> Option<Outcome> {
        if self.world.population.is_empty(Faction::Alien) {
            Some(Outcome::Won)
        } else if self.world.population.is_empty(Faction::Crew) {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    /// Request a transition and run it, and anything it sets off, to completion.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when nothing is defined from the current state to
    /// the requested one. The state is left untouched.
    pub fn fire(&mut self, transition: Transition) -> GameResult<()> {
        let mut pending = Some(transition);
        while let Some(next) = pending.take() {
            let followup = self.apply(next)?;
            pending = self.run(followup)?;
        }
        Ok(())
    }

    fn invalid(from: StateKey, to: StateKey) -> GameError {
        log::error!("invalid state transition {} -> {}", from, to);
        GameError::InvalidTransition { from, to }
    }

    fn cached_focus(&self) -> Option<ActorId> {
        match self.cache.get(&StateKey::FocusCrew) {
            Some(GameState::FocusCrew { actor }) => Some(*actor),
            _ => None,
        }
    }

    fn crew_at(&self, index: usize) -> GameResult<ActorId> {
        self.world
            .population
            .crew()
            .get(index)
            .map(|a| a.id)
            .ok_or_else(|| GameError::InvalidInput(format!("no crew member at index {}", index)))
    }

    fn crew_index(&self, actor: ActorId) -> GameResult<usize> {
        self.world
            .population
            .index_of(actor)
            .ok_or(GameError::UnknownActor(actor))
    }

    /// Look up the transition, cache the state being left, and switch.
    fn apply(&mut self, transition: Transition) -> GameResult<Followup> {
        let from = self.state.key();
        let to = transition.key();

        let (next, followup) = match (&self.state, transition) {
            (GameState::GameOver { .. }, _) => return Err(Self::invalid(from, to)),
            (_, Transition::GameOver { outcome }) => {
                (GameState::GameOver { outcome }, Followup::Announce(outcome))
            }
            (GameState::FocusCrew { actor }, Transition::SelectAbility { ability }) => {
                let actor = *actor;
                if ability.descriptor().targetable {
                    (GameState::SelectAbility { ability }, Followup::Nothing)
                } else {
                    // Nothing to aim, so skip straight to resolving it.
                    let index = self.crew_index(actor)?;
                    (
                        GameState::UseAbility {
                            ability,
                            target: None,
                        },
                        Followup::Resolve {
                            actor,
                            index,
                            ability,
                            target: None,
                        },
                    )
                }
            }
            (GameState::SelectAbility { ability }, Transition::UseAbility { target }) => {
                let ability = *ability;
                let actor = self.cached_focus().ok_or_else(|| Self::invalid(from, to))?;
                let index = self.crew_index(actor)?;
                (
                    GameState::UseAbility { ability, target },
                    Followup::Resolve {
                        actor,
                        index,
                        ability,
                        target,
                    },
                )
            }
            (GameState::SelectAbility { .. }, Transition::FocusCrew { .. }) => {
                match self.cache.get(&StateKey::FocusCrew) {
                    Some(cached @ GameState::FocusCrew { .. }) => {
                        (cached.clone(), Followup::Nothing)
                    }
                    _ => return Err(Self::invalid(from, to)),
                }
            }
            (GameState::UseAbility { .. }, Transition::FocusCrew { index }) => {
                let actor = match index {
                    Some(i) => self.crew_at(i)?,
                    None => self.cached_focus().ok_or_else(|| Self::invalid(from, to))?,
                };
                (GameState::FocusCrew { actor }, Followup::Focus(actor))
            }
            (GameState::UseAbility { .. }, Transition::FocusAlien) => {
                (GameState::FocusAlien, Followup::AlienPhase)
            }
            (GameState::FocusAlien, Transition::AlienGrowth) => {
                (GameState::AlienGrowth, Followup::GrowthPhase)
            }
            (GameState::AlienGrowth, Transition::FocusCrew { index }) => {
                let actor = self.crew_at(index.unwrap_or(0))?;
                (GameState::FocusCrew { actor }, Followup::Focus(actor))
            }
            _ => return Err(Self::invalid(from, to)),
        };

        self.cache.insert(from, self.state.clone());
        log::debug!("{} -> {}", from, next.key());
        self.world.emit(GameEvent::TransitionBegin {
            from,
            to,
            data: transition,
        });
        self.state = next;
        self.world.emit(GameEvent::TransitionEnd {
            to: self.state.key(),
        });
        Ok(followup)
    }

    fn run(&mut self, followup: Followup) -> GameResult<Option<Transition>> {
        match followup {
            Followup::Nothing => Ok(None),
            Followup::Focus(actor) => {
                self.focus(Some(actor));
                Ok(None)
            }
            Followup::Announce(outcome) => {
                self.focus(None);
                log::info!("game over: {:?}", outcome);
                self.world.emit(match outcome {
                    Outcome::Won => GameEvent::GameWon,
                    Outcome::Lost => GameEvent::GameLost,
                });
                Ok(None)
            }
            Followup::Resolve {
                actor,
                index,
                ability,
                target,
            } => Ok(Some(self.resolve_crew_ability(actor, index, ability, target))),
            Followup::AlienPhase => Ok(Some(self.run_alien_phase())),
            Followup::GrowthPhase => Ok(Some(self.run_growth_phase())),
        }
    }

    fn focus(&mut self, actor: Option<ActorId>) {
        self.current = actor;
        self.world.emit(GameEvent::FocusChanged { actor });
    }

    /// Carry out a crew member's ability and decide who goes next.
    fn resolve_crew_ability(
        &mut self,
        actor: ActorId,
        index: usize,
        ability: AbilityKind,
        target: Option<Target>,
    ) -> Transition {
        let info = target.and_then(|t| self.world.describe(t));
        let result = abilities::use_ability(&mut self.world, actor, ability, target);
        if let Err(err) = &result {
            log::debug!("{} {} failed: {}", actor, ability, err);
        }
        let message = self
            .world
            .population
            .get(actor)
            .map(|user| ability.descriptor().message(user, info.as_ref()));
        if let Some(line) = message {
            self.world.log(line);
        }

        if let Some(outcome) = self.check_game_end() {
            return Transition::GameOver { outcome };
        }

        let crew_len = self.world.population.crew().len();
        let position = self.crew_index(actor).ok();
        match (result.is_ok(), position) {
            (true, Some(i)) if i + 1 >= crew_len => Transition::FocusAlien,
            (true, Some(i)) => Transition::FocusCrew { index: Some(i + 1) },
            (false, Some(i)) => Transition::FocusCrew { index: Some(i) },
            // The actor is gone; whoever slid into its slot is next.
            (_, None) if index >= crew_len => Transition::FocusAlien,
            (_, None) => Transition::FocusCrew { index: Some(index) },
        }
    }

    /// Every alien, in list order, decides and acts.
    fn run_alien_phase(&mut self) -> Transition {
        for id in self.world.population.ids(Faction::Alien) {
            if self.world.population.get(id).is_none() {
                continue;
            }
            self.focus(Some(id));

            let decision = behavior::decide(&mut self.world, id);
            let info = decision.target.and_then(|t| self.world.describe(t));
            let message = self
                .world
                .population
                .get(id)
                .map(|alien| decision.ability.descriptor().message(alien, info.as_ref()));
            if let Some(line) = message {
                self.world.log(line);
            }

            if let Err(err) =
                abilities::use_ability(&mut self.world, id, decision.ability, decision.target)
            {
                log::debug!("alien {} {} failed: {}", id, decision.ability, err);
            }

            if let Some(outcome) = self.check_game_end() {
                return Transition::GameOver { outcome };
            }
        }
        Transition::AlienGrowth
    }

    /// Each alien grows once. Eggs laid this phase sit out and lose their flag.
    fn run_growth_phase(&mut self) -> Transition {
        self.focus(None);
        let grow = AbilityKind::Grow.descriptor();
        let mut i = 0;
        // The list grows as eggs are laid; new eggs are reached in this same loop.
        while let Some(alien) = self.world.population.aliens().get(i) {
            let (id, just_born) = (alien.id, alien.just_born);
            let message = grow.message(alien, None);
            i += 1;

            if just_born {
                if let Some(egg) = self.world.population.get_mut(id) {
                    egg.just_born = false;
                }
                continue;
            }
            let target = Some(Target::Actor(id));
            match abilities::use_ability(&mut self.world, id, AbilityKind::Grow, target) {
                Ok(()) => self.world.log(message),
                Err(err) => log::debug!("alien {} did not grow: {}", id, err),
            }
        }

        match self.check_game_end() {
            Some(outcome) => Transition::GameOver { outcome },
            None => Transition::FocusCrew { index: Some(0) },
        }
    }
}
