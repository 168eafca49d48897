//! Moderator lifecycle state.
//!
//! ```text
//! SETUP --start--> RUNNING --> NIGHT <--> DAY
//!                                 \       /
//!                                  ENDED  (on win detection)
//! ```

use serde::{Deserialize, Serialize};

/// Where the moderator is in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    Setup,
    Running,
    Night,
    Day,
    Ended,
}

impl GameState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameState::Setup => "SETUP",
            GameState::Running => "RUNNING",
            GameState::Night => "NIGHT",
            GameState::Day => "DAY",
            GameState::Ended => "ENDED",
        }
    }

    /// Started and not yet over.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, GameState::Running | GameState::Night | GameState::Day)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_display() {
        for state in [
            GameState::Setup,
            GameState::Running,
            GameState::Night,
            GameState::Day,
            GameState::Ended,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
    }

    #[test]
    fn test_in_progress() {
        assert!(!GameState::Setup.is_in_progress());
        assert!(GameState::Night.is_in_progress());
        assert!(!GameState::Ended.is_in_progress());
    }
}
