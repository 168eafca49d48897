//! Core game types: roles, players, roster, lifecycle state, RNG,
//! configuration and errors.
//!
//! Nothing in here drives a game; the [`Moderator`](crate::moderator::Moderator)
//! does that using these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod role;
pub mod roster;
pub mod state;

pub use config::{GameConfig, MIN_PLAYERS};
pub use error::{GameError, SetupError};
pub use player::{Elimination, Player, Seat};
pub use rng::GameRng;
pub use role::{NightAction, Role};
pub use roster::Roster;
pub use state::GameState;
