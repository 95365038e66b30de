//! various types that are useful for working with the territory engine
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x offset
    pub x: i32,
    /// y offset
    pub y: i32,
}

/// A coordinate on the grid, including the border ring.
///
/// `x` is the column and `y` the row, both counted from the top left corner of the
/// border, so the interior of a grid of size `n` spans `1..=n` on both axes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// column
    pub x: i32,
    /// row
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// returns this position offset by the given vector
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    /// the four orthogonal neighbours of this position, in `Move::all()` order
    pub fn neighbors(&self) -> [Position; 4] {
        [
            self.add_vec(Move::Up.to_vector()),
            self.add_vec(Move::Down.to_vector()),
            self.add_vec(Move::Left.to_vector()),
            self.add_vec(Move::Right.to_vector()),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a heading requested from outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector. rows grow downwards, so `Up` decrements `y`
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: -1 },
            Move::Down => Vector { x: 0, y: 1 },
        }
    }

    /// returns a vec of all possible moves
    pub fn all() -> Vec<Move> {
        vec![Move::Up, Move::Down, Move::Left, Move::Right]
    }

    /// the move pointing the other way
    pub fn reverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// checks if a given move is not opposite this move. e.g. Up is not opposite to Left, but is opposite to Down
    pub fn is_not_opposite(&self, other: &Move) -> bool {
        other.reverse() != *self
    }
}

/// The facing of an actor: one of the four moves, or standing still
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// heading one cell per tick in the given direction
    Moving(Move),
    /// not moving, the state every actor respawns in
    Stay,
}

impl Direction {
    /// the offset applied by one advance, zero for `Stay`
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Moving(mv) => mv.to_vector(),
            Direction::Stay => Vector { x: 0, y: 0 },
        }
    }

    #[allow(missing_docs)]
    pub fn is_stay(&self) -> bool {
        matches!(self, Direction::Stay)
    }
}

impl From<Move> for Direction {
    fn from(mv: Move) -> Self {
        Direction::Moving(mv)
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Stay
    }
}

/// token to represent an actor id. ids are handed out in registration order, which is
/// also the order actors are stepped in and the tie-break order on the scoreboard
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ActorId(pub u8);

impl ActorId {
    /// convert this actor ID to a usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Serialize for ActorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Instruments to be used with the tick engine
pub trait TickInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_tick(&self, duration: Duration);
}

/// Instruments that observe nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstruments;

impl TickInstruments for NoopInstruments {
    fn observe_tick(&self, _duration: Duration) {}
}
