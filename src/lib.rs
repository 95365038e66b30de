#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A territory simulation engine for grid conquest games in the style of splix.
//!
//! Actors move a head across a bordered grid. Outside their own territory they lay a
//! trail; returning home turns the trail into territory, along with any empty pocket
//! the new boundary seals off from the border. Running into one's own trail wipes the
//! actor and respawns it somewhere else with a fresh 3x3 base.
//!
//! The engine is single threaded and turn based. A caller drives it like so:
//! ```
//! # use splix_engine::{game::Game, types::Move};
//! let mut game = Game::create(10).unwrap();
//! let red = game.register_actor("Player 1").unwrap();
//! game.start().unwrap();
//! game.set_direction(red, Move::Right).unwrap();
//! game.tick().unwrap();
//! game.update_scoreboard();
//! for line in game.scoreboard_lines() {
//!     println!("{}", line);
//! }
//! ```
//! Rendering, input decoding and frame pacing live outside this crate; they only need
//! [game::Game::cell_state] and [game::Game::scoreboard].

pub mod actor;
pub mod cell_set;
pub mod colors;
pub mod enclosure;
pub mod error;
pub mod game;
pub mod grid;
pub mod scoreboard;
pub mod settings;
pub mod types;

pub use error::GameError;
pub use game::Game;

/// Loads settings from a fixture string
pub fn settings_fixture(settings_fixture: &str) -> settings::GameSettings {
    let s: Result<settings::GameSettings, _> = settings::GameSettings::from_json(settings_fixture);
    s.expect("the json literal is valid")
}
