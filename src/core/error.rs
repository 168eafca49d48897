//! Error types for setup and play.

use thiserror::Error;

use super::state::GameState;
use crate::decision::ProviderError;

/// Invalid game configuration or roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("the game requires at least {minimum} players (got {players})")]
    TooFewPlayers { players: usize, minimum: usize },
    #[error("human players ({humans}) cannot exceed total players ({players})")]
    TooManyHumans { humans: usize, players: usize },
    #[error("duplicate player name: {0}")]
    DuplicateName(String),
    #[error("roster has no players")]
    EmptyRoster,
}

/// Failure while running a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("game has already been started")]
    AlreadyStarted,
    #[error("game is not running (state {0})")]
    NotRunning(GameState),
    /// A provider returned a selection outside the offered targets.
    #[error("{player} selected {selection:?}, which is not one of {valid:?}")]
    InvalidSelection {
        player: String,
        selection: String,
        valid: Vec<String>,
    },
    #[error("decision provider for {player} failed")]
    Provider {
        player: String,
        #[source]
        source: ProviderError,
    },
}
