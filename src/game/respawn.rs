use itertools::Itertools;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::GameError;
use crate::grid::CellState;
use crate::types::Position;

use super::Game;

impl Game {
    /// wipes the actor and respawns it at a random free cell
    pub(super) fn respawn_index(&mut self, idx: usize) -> Result<(), GameError> {
        self.clear_claims(idx)?;
        let center = self.choose_spawn()?;
        self.place(idx, center)
    }

    pub(super) fn respawn_index_at(&mut self, idx: usize, center: Position) -> Result<(), GameError> {
        self.clear_claims(idx)?;
        self.place(idx, center)
    }

    /// drops every cell actor `idx` holds, including its head, repainting each from
    /// whatever the remaining actors hold there
    fn clear_claims(&mut self, idx: usize) -> Result<(), GameError> {
        let actor = &mut self.actors[idx];
        let mut cells = actor.trail.take();
        cells.extend(actor.territory.take());
        cells.extend(actor.position.take());

        for pos in cells {
            let state = self.uncovered_state(idx, pos);
            self.grid.write(pos, state)?;
        }
        Ok(())
    }

    /// a random empty interior cell. a bounded number of uniform draws first, then a
    /// scan of every empty cell
    fn choose_spawn(&mut self) -> Result<Position, GameError> {
        let size = self.grid.size() as i32;
        for _ in 0..self.settings.respawn_attempts {
            let pos = Position::new(self.rng.gen_range(1..=size), self.rng.gen_range(1..=size));
            if self.grid.read(pos)?.is_empty() {
                return Ok(pos);
            }
        }

        warn!(
            attempts = self.settings.respawn_attempts,
            "random respawn placement failed, scanning for a free cell"
        );
        self.grid
            .positions_where(CellState::is_empty)
            .choose(&mut self.rng)
            .ok_or(GameError::NoRespawnSpace)
    }

    /// stands the actor on `center` and grants the 3x3 block around it, clipped to the
    /// interior. cells held by other actors are left to them
    fn place(&mut self, idx: usize, center: Position) -> Result<(), GameError> {
        let base = self.color_of(idx);
        self.actors[idx].reset(center);

        for (dy, dx) in (-1..=1).cartesian_product(-1..=1) {
            let pos = Position::new(center.x + dx, center.y + dy);
            if !self.grid.is_interior(pos) || !self.grid.read(pos)?.is_empty() {
                continue;
            }
            self.grid.write(pos, CellState::Territory(base))?;
            self.actors[idx].territory.insert(pos);
        }
        self.grid.write(center, CellState::Head(base))?;

        debug!(
            actor = idx,
            %center,
            territory = self.actors[idx].territory.len(),
            "respawned"
        );
        Ok(())
    }
}
