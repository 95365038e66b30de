//! The game: one grid, the actor registry and the scoreboard.
//!
//! [Game] is the only writer of grid and actor state. A tick steps every actor in
//! registration order, running each actor's whole transition (enclosure sweep
//! included) before moving on to the next one.
//!
//! Cells are owned exclusively: a cell sits in at most one set of at most one actor,
//! and the grid paints exactly that marker. The only thing allowed to cover a
//! claimed cell is a head standing on it.
mod respawn;
mod step;

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};

use crate::actor::Actor;
use crate::colors::{self, BaseColor};
use crate::error::GameError;
use crate::grid::{CellState, Grid};
use crate::scoreboard::{Scoreboard, Standing};
use crate::settings::GameSettings;
use crate::types::{ActorId, Move, NoopInstruments, Position, TickInstruments};

pub use step::StepOutcome;

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    settings: GameSettings,
    grid: Grid,
    actors: Vec<Actor>,
    scoreboard: Scoreboard,
    rng: SmallRng,
    turn: u64,
}

impl Game {
    /// a game with default settings on a `size x size` interior
    pub fn create(size: u16) -> Result<Self, GameError> {
        Self::from_settings(GameSettings::with_size(size))
    }

    #[allow(missing_docs)]
    pub fn from_settings(settings: GameSettings) -> Result<Self, GameError> {
        settings.validate()?;
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Game {
            grid: Grid::new(settings.size),
            scoreboard: Scoreboard::new(settings.size),
            actors: vec![],
            rng,
            turn: 0,
            settings,
        })
    }

    #[allow(missing_docs)]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// read only view of the grid, for renderers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// number of ticks run so far
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// registers a new actor under the given name
    pub fn register_actor(&mut self, name: impl Into<String>) -> Result<ActorId, GameError> {
        self.register(Actor::new(name))
    }

    /// registers an actor, assigning it the first free color. fails, without adding
    /// the actor, once the pool is exhausted
    pub fn register(&mut self, mut actor: Actor) -> Result<ActorId, GameError> {
        let used = self
            .actors
            .iter()
            .filter_map(|a| a.color())
            .collect::<Vec<_>>();
        let base = match colors::assign(&used) {
            Some(base) => base,
            None => {
                warn!(name = actor.name(), "color pool exhausted, rejecting actor");
                return Err(GameError::ColorPoolExhausted {
                    name: actor.name().to_string(),
                });
            }
        };
        actor.assign_color(base);
        let id = ActorId(self.actors.len() as u8);
        self.actors.push(actor);
        Ok(id)
    }

    #[allow(missing_docs)]
    pub fn actor(&self, id: ActorId) -> Result<&Actor, GameError> {
        self.actors
            .get(id.as_usize())
            .ok_or(GameError::UnknownActor(id))
    }

    /// registered actors, in registration order
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(idx, actor)| (ActorId(idx as u8), actor))
    }

    /// respawns every registered actor at a random position with a fresh base
    pub fn start(&mut self) -> Result<(), GameError> {
        for idx in 0..self.actors.len() {
            self.respawn_index(idx)?;
        }
        info!(actors = self.actors.len(), size = self.grid.size(), "game started");
        Ok(())
    }

    /// turns an actor; reversals are ignored. returns whether the turn was taken
    pub fn set_direction(&mut self, id: ActorId, mv: Move) -> Result<bool, GameError> {
        self.actors
            .get_mut(id.as_usize())
            .map(|actor| actor.set_direction(mv))
            .ok_or(GameError::UnknownActor(id))
    }

    /// advances the simulation by one step
    pub fn tick(&mut self) -> Result<Vec<StepOutcome>, GameError> {
        self.tick_instrumented(&NoopInstruments)
    }

    /// advances the simulation by one step, reporting how long it took. returns what
    /// happened to each actor, in registration order
    #[instrument(level = "trace", skip_all, fields(turn = self.turn))]
    pub fn tick_instrumented<I: TickInstruments>(
        &mut self,
        instruments: &I,
    ) -> Result<Vec<StepOutcome>, GameError> {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(self.actors.len());
        for idx in 0..self.actors.len() {
            outcomes.push(self.step_actor(idx)?);
        }
        self.turn += 1;

        if !self.assert_consistency() {
            panic!(
                "caught an inconsistent tick, turn: {} outcomes: {:?} grid: {}",
                self.turn, outcomes, self.grid
            );
        }
        instruments.observe_tick(start.elapsed());
        Ok(outcomes)
    }

    /// recomputes the scoreboard from the actors' territory sets
    pub fn update_scoreboard(&mut self) {
        self.scoreboard.update(self.actors.iter());
    }

    /// the ranking as of the last [Game::update_scoreboard]
    pub fn scoreboard(&self) -> &[Standing] {
        self.scoreboard.standings()
    }

    /// the ranking as of the last update, as leaderboard lines
    pub fn scoreboard_lines(&self) -> Vec<String> {
        self.scoreboard.lines().collect()
    }

    /// read only cell inspection for renderers
    pub fn cell_state(&self, pos: Position) -> Result<CellState, GameError> {
        self.grid.read(pos)
    }

    /// respawns the actor at a random free position
    pub fn respawn(&mut self, id: ActorId) -> Result<(), GameError> {
        self.actor(id)?;
        self.respawn_index(id.as_usize())
    }

    /// respawns the actor centred on a chosen interior position
    pub fn respawn_at(&mut self, id: ActorId, pos: Position) -> Result<(), GameError> {
        self.actor(id)?;
        if !self.grid.in_bounds(pos) {
            return Err(GameError::OutOfBounds { position: pos });
        }
        if !self.grid.is_interior(pos) {
            return Err(GameError::BorderWrite { position: pos });
        }
        self.respawn_index_at(id.as_usize(), pos)
    }

    fn color_of(&self, idx: usize) -> BaseColor {
        match self.actors[idx].color() {
            Some(base) => base,
            None => unreachable!("registered actor {} has no color", idx),
        }
    }

    /// the color of some actor other than `idx` standing on `pos`
    fn other_head_at(&self, idx: usize, pos: Position) -> Option<BaseColor> {
        self.actors
            .iter()
            .enumerate()
            .find(|(other, actor)| *other != idx && actor.position == Some(pos))
            .map(|(other, _)| self.color_of(other))
    }

    /// what the grid shows at `pos` once actor `idx` is no longer on or claiming it
    fn uncovered_state(&self, idx: usize, pos: Position) -> CellState {
        if let Some(other) = self.other_head_at(idx, pos) {
            return CellState::Head(other);
        }
        for (other, actor) in self.actors.iter().enumerate() {
            if other == idx {
                continue;
            }
            let base = self.color_of(other);
            if actor.trail.contains(pos) {
                return CellState::Trail(base);
            }
            if actor.territory.contains(pos) {
                return CellState::Territory(base);
            }
        }
        CellState::Empty
    }

    /// takes `pos` away from every actor but `idx`
    fn evict_others(&mut self, idx: usize, pos: Position) {
        for (other, actor) in self.actors.iter_mut().enumerate() {
            if other != idx {
                actor.trail.remove(pos);
                actor.territory.remove(pos);
            }
        }
    }

    /// writes one of actor `idx`'s markers. a rival standing there stays on top
    fn paint(&mut self, idx: usize, pos: Position, state: CellState) -> Result<(), GameError> {
        match self.other_head_at(idx, pos) {
            Some(other) => self.grid.write(pos, CellState::Head(other)),
            None => self.grid.write(pos, state),
        }
    }

    /// checks that the grid and every actor's sets agree. returns false on the first
    /// disagreement
    pub fn assert_consistency(&self) -> bool {
        let width = self.grid.width();
        for i in 0..width {
            for edge in [
                Position::new(i, 0),
                Position::new(i, width - 1),
                Position::new(0, i),
                Position::new(width - 1, i),
            ] {
                if !matches!(self.grid.read(edge), Ok(CellState::Border)) {
                    return false;
                }
            }
        }

        let mut seen = fxhash::FxHashSet::default();
        for (idx, actor) in self.actors.iter().enumerate() {
            let base = match actor.color() {
                Some(base) => base,
                None => return false,
            };
            if let Some(pos) = actor.position {
                if !self.grid.is_interior(pos) {
                    return false;
                }
            }
            let covered_by_head = |pos: Position| {
                matches!(self.grid.read(pos), Ok(CellState::Head(owner))
                    if self.actors.iter().any(|a| a.color() == Some(owner) && a.position == Some(pos)))
            };
            for pos in actor.trail.iter() {
                if !seen.insert(pos) {
                    return false;
                }
                if self.grid.read(pos).ok() != Some(CellState::Trail(base)) && !covered_by_head(pos)
                {
                    return false;
                }
            }
            for pos in actor.territory.iter() {
                if !seen.insert(pos) {
                    return false;
                }
                if self.grid.read(pos).ok() != Some(CellState::Territory(base))
                    && !covered_by_head(pos)
                {
                    return false;
                }
            }
            let painted = self.grid.positions_where(move |c| c.owner() == Some(base));
            for pos in painted {
                let ok = match self.grid.read(pos) {
                    Ok(CellState::Head(_)) => actor.position == Some(pos),
                    Ok(CellState::Trail(_)) => actor.trail.contains(pos),
                    Ok(CellState::Territory(_)) => actor.territory.contains(pos),
                    _ => false,
                };
                if !ok {
                    debug!(actor = idx, ?pos, "painted cell not tracked");
                    return false;
                }
            }
        }
        true
    }
}
