//! Snapshots handed to decision providers.

use super::Moderator;
use crate::core::Player;
use crate::decision::{EliminatedPlayer, GameContext};

impl Moderator<'_> {
    /// Build the context for a request, optionally personalised for `player`.
    #[must_use]
    pub fn game_context(&self, player: Option<&Player>) -> GameContext {
        let alive_players = self.roster.alive().map(|p| p.name().to_string()).collect();
        let eliminated_players = self
            .roster
            .players()
            .filter(|p| !p.is_alive())
            .map(|p| EliminatedPlayer {
                name: p.name().to_string(),
                role: p.role(),
                round: p.elimination_round(),
            })
            .collect();

        GameContext {
            round_number: self.round_number,
            game_state: self.state,
            alive_players,
            eliminated_players,
            last_eliminated: self.last_eliminated.clone(),
            status: self.status_summary(),
            player_name: player.map(|p| p.name().to_string()),
            role: player.map(Player::role),
        }
    }

    fn status_summary(&self) -> String {
        let mut status = format!("Round {} is starting.", self.round_number);
        if let Some(name) = &self.last_eliminated {
            status.push_str(&format!(" Player {name} was eliminated in the previous phase."));
        }
        status
    }
}
