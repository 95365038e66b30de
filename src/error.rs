//! the error type shared by every fallible engine operation
use thiserror::Error;

use crate::types::{ActorId, Position};

/// Errors produced by the grid, the actor registry and settings loading.
///
/// Internal-consistency violations are not reported here; they panic.
#[derive(Debug, Error)]
pub enum GameError {
    /// The coordinate is outside the allocated field, border ring included.
    #[error("position {position} is outside the grid")]
    OutOfBounds {
        #[allow(missing_docs)]
        position: Position,
    },

    /// The border ring is only ever written during grid creation.
    #[error("position {position} is part of the border and cannot be written")]
    BorderWrite {
        #[allow(missing_docs)]
        position: Position,
    },

    /// Every color in the pool is taken.
    #[error("no color left in the pool for actor {name:?}")]
    ColorPoolExhausted {
        #[allow(missing_docs)]
        name: String,
    },

    #[allow(missing_docs)]
    #[error("{0} is not registered")]
    UnknownActor(ActorId),

    /// Every interior cell is claimed by some other actor.
    #[error("no free interior cell to respawn on")]
    NoRespawnSpace,

    #[allow(missing_docs)]
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[allow(missing_docs)]
    #[error("could not parse settings: {0}")]
    Settings(#[from] serde_json::Error),
}
