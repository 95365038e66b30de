use tracing::{debug, trace};

use crate::enclosure::fill_enclosures;
use crate::error::GameError;
use crate::grid::CellState;

use super::Game;

/// What a single actor did during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// the actor has never been spawned
    Unplaced,
    /// standing still, head re-asserted in place
    Stayed,
    /// the move would have left the field; the actor stopped where it was
    Blocked,
    /// moved one cell
    Moved,
    /// re-entered own territory with a trail, claiming it and any enclosed pockets
    Closed {
        /// trail cells turned into territory
        converted: usize,
        /// empty cells claimed by the enclosure sweep
        enclosed: usize,
    },
    /// ran into its own trail and was respawned
    Respawned,
}

impl Game {
    /// runs one actor's full transition for this tick
    pub(super) fn step_actor(&mut self, idx: usize) -> Result<StepOutcome, GameError> {
        let base = self.color_of(idx);
        let pos = match self.actors[idx].position {
            Some(pos) => pos,
            None => return Ok(StepOutcome::Unplaced),
        };
        let direction = self.actors[idx].direction;
        let current = self.grid.read(pos)?;

        if direction.is_stay() || current.is_border() {
            self.actors[idx].halt();
            if !current.is_border() {
                self.grid.write(pos, CellState::Head(base))?;
            }
            return Ok(StepOutcome::Stayed);
        }

        // a move into the border is refused before anything is touched, which leaves
        // the grid exactly as it was before the step
        let next = pos.add_vec(direction.to_vector());
        if self.grid.read(next)?.is_border() {
            trace!(actor = idx, %pos, "move into the border refused");
            self.actors[idx].halt();
            return Ok(StepOutcome::Blocked);
        }

        if self.actors[idx].territory.contains(pos) {
            self.paint(idx, pos, CellState::Territory(base))?;
        } else {
            self.evict_others(idx, pos);
            self.actors[idx].trail.insert(pos);
            self.paint(idx, pos, CellState::Trail(base))?;
        }
        self.actors[idx].advance();

        // fixed order: own trail, then own territory, then anything else
        let actor = &self.actors[idx];
        if actor.trail.contains(next) {
            debug!(actor = idx, %next, trail = actor.trail.len(), "ran into own trail");
            self.respawn_index(idx)?;
            return Ok(StepOutcome::Respawned);
        }

        if actor.territory.contains(next) && !actor.trail.is_empty() {
            let converted = self.convert_trail(idx)?;
            let enclosed = fill_enclosures(&mut self.grid, base, &mut self.actors[idx].territory)?;
            self.grid.write(next, CellState::Head(base))?;
            debug!(
                actor = idx,
                converted,
                enclosed,
                territory = self.actors[idx].territory.len(),
                "closed trail"
            );
            return Ok(StepOutcome::Closed {
                converted,
                enclosed,
            });
        }

        self.grid.write(next, CellState::Head(base))?;
        Ok(StepOutcome::Moved)
    }

    /// turns the whole trail of actor `idx` into territory, returning how many cells moved
    fn convert_trail(&mut self, idx: usize) -> Result<usize, GameError> {
        let base = self.color_of(idx);
        let trail = self.actors[idx].trail.take();
        for pos in trail.iter() {
            self.actors[idx].territory.insert(*pos);
            self.paint(idx, *pos, CellState::Territory(base))?;
        }
        Ok(trail.len())
    }
}
