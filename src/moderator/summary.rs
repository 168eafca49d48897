//! End-of-game summary for export.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Moderator;
use crate::core::Role;
use crate::events::EventLog;
use crate::rules::Winner;

/// A player's entry in the summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub role: Role,
    pub initial_status: String,
}

/// Everything an external writer needs to persist a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: String,
    pub rounds_played: u32,
    pub winner: Option<Winner>,
    pub players: BTreeMap<String, PlayerRecord>,
    pub log: EventLog,
}

impl Moderator<'_> {
    /// Summarise the game so far under `game_id`.
    ///
    /// The winner is re-evaluated from the roster, not cached.
    #[must_use]
    pub fn summary(&self, game_id: impl Into<String>) -> GameSummary {
        let players = self
            .roster
            .players()
            .map(|p| {
                let record = PlayerRecord {
                    role: p.role(),
                    initial_status: "Alive".to_string(),
                };
                (p.name().to_string(), record)
            })
            .collect();

        GameSummary {
            game_id: game_id.into(),
            rounds_played: self.round_number,
            winner: self.winner(),
            players,
            log: self.log.clone(),
        }
    }
}
