//! Players and seats.
//!
//! ## Player
//!
//! Plain data: a unique name, an immutable [`Role`], and alive/eliminated
//! status. `alive` only ever moves from `true` to `false` during a game.
//!
//! ## Seat
//!
//! A player paired with the [`DecisionProvider`] that speaks and chooses for
//! it. The seat forwards requests to the provider and returns its results
//! untouched.

use serde::Serialize;

use super::role::{NightAction, Role};
use crate::decision::{DecisionProvider, DecisionResult, GameContext, ProviderError};

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    role: Role,
    alive: bool,
    elimination_round: Option<u32>,
}

/// Result of [`Player::eliminate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elimination {
    /// The player was alive and is now eliminated.
    Eliminated,
    /// The player was already out; nothing changed.
    AlreadyEliminated,
}

impl Player {
    /// Create a living player with a fixed role.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            alive: true,
            elimination_round: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Round in which the player was eliminated, if any.
    #[must_use]
    pub fn elimination_round(&self) -> Option<u32> {
        self.elimination_round
    }

    /// Eliminate the player in `round`.
    ///
    /// Idempotent: eliminating an eliminated player changes nothing and
    /// reports [`Elimination::AlreadyEliminated`].
    pub fn eliminate(&mut self, round: u32) -> Elimination {
        if self.alive {
            self.alive = false;
            self.elimination_round = Some(round);
            Elimination::Eliminated
        } else {
            Elimination::AlreadyEliminated
        }
    }

    /// Resolve this player's night ability against an optional target.
    #[must_use]
    pub fn night_action(&self, target: Option<&Player>) -> NightAction {
        self.role.night_action(self, target)
    }

    /// One-line status, e.g. `Name: A, Role: Villager, Status: Alive`.
    #[must_use]
    pub fn status(&self) -> String {
        let status = if self.alive { "Alive" } else { "Eliminated" };
        format!("Name: {}, Role: {}, Status: {}", self.name, self.role, status)
    }

    /// Bring the player back for a fresh game. Only `Roster::reset` calls this.
    pub(crate) fn restore(&mut self) {
        self.alive = true;
        self.elimination_round = None;
    }
}

/// A player together with its decision provider.
pub struct Seat {
    player: Player,
    provider: Box<dyn DecisionProvider>,
}

impl Seat {
    pub fn new(player: Player, provider: impl DecisionProvider + 'static) -> Self {
        Self::boxed(player, Box::new(provider))
    }

    pub fn boxed(player: Player, provider: Box<dyn DecisionProvider>) -> Self {
        Self { player, provider }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Ask the provider what this player says during the day.
    pub fn request_discussion(
        &mut self,
        context: &GameContext,
    ) -> Result<DecisionResult, ProviderError> {
        self.provider.discussion_text(context)
    }

    /// Ask the provider to pick one of `valid_targets`.
    pub fn request_target_selection(
        &mut self,
        context: &GameContext,
        valid_targets: &[String],
    ) -> Result<DecisionResult, ProviderError> {
        self.provider.target_selection(context, valid_targets)
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat").field("player", &self.player).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ScriptedProvider;

    #[test]
    fn test_new_player_is_alive() {
        let player = Player::new("A", Role::Villager);

        assert!(player.is_alive());
        assert_eq!(player.elimination_round(), None);
        assert_eq!(player.status(), "Name: A, Role: Villager, Status: Alive");
    }

    #[test]
    fn test_eliminate_is_idempotent() {
        let mut player = Player::new("W", Role::Werewolf);

        assert_eq!(player.eliminate(2), Elimination::Eliminated);
        assert!(!player.is_alive());
        assert_eq!(player.elimination_round(), Some(2));

        assert_eq!(player.eliminate(5), Elimination::AlreadyEliminated);
        assert!(!player.is_alive());
        assert_eq!(player.elimination_round(), Some(2));
        assert_eq!(player.status(), "Name: W, Role: Werewolf, Status: Eliminated");
    }

    #[test]
    fn test_restore() {
        let mut player = Player::new("A", Role::Villager);
        player.eliminate(1);
        player.restore();

        assert!(player.is_alive());
        assert_eq!(player.elimination_round(), None);
    }

    #[test]
    fn test_seat_forwards_to_provider() {
        let provider = ScriptedProvider::new()
            .saying(|_| "hello".to_string())
            .choosing(|_, targets| targets[1].clone());
        let mut seat = Seat::new(Player::new("A", Role::Villager), provider);
        let context = GameContext::default();

        let said = seat.request_discussion(&context).unwrap();
        assert_eq!(said.final_decision, "hello");

        let targets = vec!["B".to_string(), "C".to_string()];
        let chosen = seat.request_target_selection(&context, &targets).unwrap();
        assert_eq!(chosen.final_decision, "C");
    }
}
