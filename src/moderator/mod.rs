//! The game moderator: a state machine that runs rounds over a roster.
//!
//! ## Lifecycle
//!
//! A moderator starts in [`GameState::Setup`]. [`Moderator::run`] moves it
//! to `Running` and then plays rounds (night, win check, day, win check)
//! until one side wins, ending in [`GameState::Ended`].
//!
//! ## Ownership
//!
//! The moderator borrows the roster mutably for the length of one game. The
//! caller keeps ownership and is responsible for [`Roster::reset`] before
//! reusing it; the moderator never revives players.

mod context;
mod phases;
mod summary;

pub use summary::{GameSummary, PlayerRecord};

use tracing::info;

use crate::core::{GameError, GameState, Roster};
use crate::decision::DecisionResult;
use crate::events::EventLog;
use crate::rules::{self, Winner};

/// Runs one game over a borrowed roster.
#[derive(Debug)]
pub struct Moderator<'r> {
    roster: &'r mut Roster,
    state: GameState,
    round_number: u32,
    last_eliminated: Option<String>,
    log: EventLog,
}

impl<'r> Moderator<'r> {
    /// Create a moderator for a roster whose roles are already assigned.
    pub fn new(roster: &'r mut Roster) -> Self {
        Self {
            roster,
            state: GameState::Setup,
            round_number: 0,
            last_eliminated: None,
            log: EventLog::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Rounds started so far.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Player eliminated in the current phase, if any.
    #[must_use]
    pub fn last_eliminated(&self) -> Option<&str> {
        self.last_eliminated.as_deref()
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &*self.roster
    }

    /// Move from `Setup` to `Running`.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::AlreadyStarted);
        }
        self.state = GameState::Running;
        info!(players = self.roster.len(), "game started");
        Ok(())
    }

    /// Start the game and play rounds until a side wins.
    pub fn run(&mut self) -> Result<Winner, GameError> {
        self.start()?;
        loop {
            if let Some(winner) = self.play_round()? {
                info!(%winner, rounds = self.round_number, "game over");
                return Ok(winner);
            }
        }
    }

    /// Play one round: night, win check, then day and win check unless the
    /// night already decided the game.
    pub fn play_round(&mut self) -> Result<Option<Winner>, GameError> {
        self.ensure_in_progress()?;

        self.round_number += 1;
        info!(round = self.round_number, "round started");

        self.night_phase()?;
        if let Some(winner) = self.check_win_condition() {
            return Ok(Some(winner));
        }

        self.day_phase()?;
        Ok(self.check_win_condition())
    }

    /// Evaluate the win condition now, ending the game if a side has won.
    pub fn check_win_condition(&mut self) -> Option<Winner> {
        let winner = self.winner();
        if winner.is_some() {
            self.state = GameState::Ended;
        }
        winner
    }

    /// Evaluate the win condition without touching state.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        rules::evaluate_roster(&*self.roster)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.state.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::NotRunning(self.state))
        }
    }

    /// Reject selections outside the offered targets before acting on them.
    fn checked_selection(
        player: &str,
        decision: &DecisionResult,
        valid_targets: &[String],
    ) -> Result<String, GameError> {
        if valid_targets.contains(&decision.final_decision) {
            Ok(decision.final_decision.clone())
        } else {
            Err(GameError::InvalidSelection {
                player: player.to_string(),
                selection: decision.final_decision.clone(),
                valid: valid_targets.to_vec(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Role, Seat};
    use crate::decision::ScriptedProvider;

    fn roster(roles: &[(&str, Role)]) -> Roster {
        Roster::new(
            roles
                .iter()
                .map(|(name, role)| Seat::new(Player::new(*name, *role), ScriptedProvider::new()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_moderator_is_in_setup() {
        let mut r = roster(&[("W", Role::Werewolf), ("A", Role::Villager)]);
        let moderator = Moderator::new(&mut r);

        assert_eq!(moderator.state(), GameState::Setup);
        assert_eq!(moderator.round_number(), 0);
        assert!(moderator.last_eliminated().is_none());
        assert!(moderator.log().is_empty());
    }

    #[test]
    fn test_start_twice_fails() {
        let mut r = roster(&[("W", Role::Werewolf), ("A", Role::Villager)]);
        let mut moderator = Moderator::new(&mut r);

        moderator.start().unwrap();
        assert_eq!(moderator.state(), GameState::Running);
        assert!(matches!(moderator.start(), Err(GameError::AlreadyStarted)));
    }

    #[test]
    fn test_play_round_requires_start() {
        let mut r = roster(&[("W", Role::Werewolf), ("A", Role::Villager)]);
        let mut moderator = Moderator::new(&mut r);

        assert!(matches!(
            moderator.play_round(),
            Err(GameError::NotRunning(GameState::Setup))
        ));
    }

    #[test]
    fn test_check_win_condition_ends_game() {
        let mut r = roster(&[("W", Role::Werewolf), ("A", Role::Villager)]);
        let mut moderator = Moderator::new(&mut r);
        moderator.start().unwrap();

        assert_eq!(moderator.check_win_condition(), Some(Winner::Werewolves));
        assert_eq!(moderator.state(), GameState::Ended);
        assert!(matches!(moderator.play_round(), Err(GameError::NotRunning(GameState::Ended))));
    }

    #[test]
    fn test_winner_is_pure() {
        let mut r = roster(&[
            ("W", Role::Werewolf),
            ("A", Role::Villager),
            ("B", Role::Villager),
        ]);
        let moderator = Moderator::new(&mut r);

        assert_eq!(moderator.winner(), None);
        assert_eq!(moderator.state(), GameState::Setup);
    }

    #[test]
    fn test_checked_selection() {
        let valid = vec!["A".to_string(), "B".to_string()];

        let ok = Moderator::checked_selection("W", &DecisionResult::new("B"), &valid).unwrap();
        assert_eq!(ok, "B");

        let err = Moderator::checked_selection("W", &DecisionResult::new("Z"), &valid).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection { ref selection, .. } if selection == "Z"));
    }
}
