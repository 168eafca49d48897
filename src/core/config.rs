//! Game configuration.
//!
//! `GameConfig` describes the table before any roles are dealt: how many
//! seats, how many of them are human, and the seed for the role deal.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 4;

/// Configuration for a single table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total number of seats.
    pub player_count: usize,

    /// Seats (from the first) driven by a human at the terminal.
    pub human_count: usize,

    /// Seed for role dealing and offline players.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 8,
            human_count: 1,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_humans(mut self, count: usize) -> Self {
        self.human_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of werewolves: one per four players, at least one.
    #[must_use]
    pub fn werewolf_count(&self) -> usize {
        (self.player_count / 4).max(1)
    }

    #[must_use]
    pub fn villager_count(&self) -> usize {
        self.player_count.saturating_sub(self.werewolf_count())
    }

    /// Check the configuration before building a roster.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.human_count > self.player_count {
            return Err(SetupError::TooManyHumans {
                humans: self.human_count,
                players: self.player_count,
            });
        }
        if self.player_count < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers {
                players: self.player_count,
                minimum: MIN_PLAYERS,
            });
        }
        Ok(())
    }
}
