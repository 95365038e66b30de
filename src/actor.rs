//! Actors: the players moving a head token around the grid.
use serde::{Deserialize, Serialize};

use crate::cell_set::CellSet;
use crate::colors::{BaseColor, Palette};
use crate::types::{Direction, Move, Position};

/// Who is steering an actor. Purely a label, the engine treats both the same.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorMode {
    /// keyboard controlled
    Player,
    /// steered by an external agent
    Rl,
}

impl Default for ActorMode {
    fn default() -> Self {
        ActorMode::Rl
    }
}

/// Where an actor is in its life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    /// registered but never respawned
    Unplaced,
    /// freshly respawned, or stopped at the border
    Idle,
    /// moving one cell per tick
    Advancing,
}

/// A single actor. Trail and territory are tracked here as well as on the grid; the
/// tick engine keeps the two in agreement.
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    mode: ActorMode,
    palette: Option<Palette>,
    pub(crate) position: Option<Position>,
    pub(crate) direction: Direction,
    pub(crate) trail: CellSet,
    pub(crate) territory: CellSet,
}

impl Actor {
    /// a new actor with no color, no position and nothing claimed
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_mode(name, ActorMode::default())
    }

    #[allow(missing_docs)]
    pub fn with_mode(name: impl Into<String>, mode: ActorMode) -> Self {
        Actor {
            name: name.into(),
            mode,
            palette: None,
            position: None,
            direction: Direction::Stay,
            trail: CellSet::new(),
            territory: CellSet::new(),
        }
    }

    /// assigns the color, deriving all three markers at once
    pub(crate) fn assign_color(&mut self, base: BaseColor) {
        self.palette = Some(Palette::new(base));
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn mode(&self) -> ActorMode {
        self.mode
    }

    #[allow(missing_docs)]
    pub fn palette(&self) -> Option<Palette> {
        self.palette
    }

    /// the assigned base color, `None` until registered
    pub fn color(&self) -> Option<BaseColor> {
        self.palette.map(|p| p.base)
    }

    #[allow(missing_docs)]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[allow(missing_docs)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// cells laid in the current run, in the order they were laid
    pub fn trail(&self) -> &CellSet {
        &self.trail
    }

    /// owned cells, in the order they were claimed
    pub fn territory(&self) -> &CellSet {
        &self.territory
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> ActorState {
        match (self.position, self.direction) {
            (None, _) => ActorState::Unplaced,
            (Some(_), Direction::Stay) => ActorState::Idle,
            (Some(_), Direction::Moving(_)) => ActorState::Advancing,
        }
    }

    /// turns the actor. a full reversal of the current heading is ignored and the
    /// last heading kept; returns whether the turn was taken
    pub fn set_direction(&mut self, mv: Move) -> bool {
        if let Direction::Moving(current) = self.direction {
            if !current.is_not_opposite(&mv) {
                return false;
            }
        }
        self.direction = Direction::Moving(mv);
        true
    }

    /// moves one cell along the current heading. no-op when staying or unplaced
    pub fn advance(&mut self) {
        if let Some(pos) = self.position {
            self.position = Some(pos.add_vec(self.direction.to_vector()));
        }
    }

    pub(crate) fn halt(&mut self) {
        self.direction = Direction::Stay;
    }

    /// drops everything claimed and stands still at `position`
    pub(crate) fn reset(&mut self, position: Position) {
        self.trail.clear();
        self.territory.clear();
        self.position = Some(position);
        self.direction = Direction::Stay;
    }
}
