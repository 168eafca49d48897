//! Night and day phases.

use serde_json::Value;
use tracing::{debug, info};

use super::Moderator;
use crate::core::{Elimination, GameError, GameState, NightAction, Role};
use crate::decision::ProviderError;
use crate::events::{keys, reasons, Details, EventType, Phase};
use crate::rules::{TallyOutcome, VoteTally};

fn provider_failure(player: &str) -> impl FnOnce(ProviderError) -> GameError + '_ {
    move |source| GameError::Provider {
        player: player.to_string(),
        source,
    }
}

impl Moderator<'_> {
    /// Run the night: the first living werewolf picks a victim for the pack.
    ///
    /// Does nothing (and logs nothing) when no werewolf or no innocent target
    /// is alive. Usually driven by [`Moderator::play_round`]; fails with
    /// [`GameError::NotRunning`] before `start` or after the game ended.
    pub fn night_phase(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.state = GameState::Night;
        self.last_eliminated = None;
        let round = self.round_number;

        let pack = self.roster.alive_indices(|p| p.role().is_werewolf());
        let Some(&speaker) = pack.first() else {
            debug!(round, "no werewolves alive, quiet night");
            return Ok(());
        };

        let valid_targets: Vec<String> = self
            .roster
            .alive()
            .filter(|p| !p.role().is_werewolf())
            .map(|p| p.name().to_string())
            .collect();
        if valid_targets.is_empty() {
            info!(round, "no innocent targets left for the werewolves");
            return Ok(());
        }

        let speaker_name = self.roster.player(speaker).name().to_string();
        let context = self.game_context(Some(self.roster.player(speaker)));
        let decision = self
            .roster
            .seat_mut(speaker)
            .request_target_selection(&context, &valid_targets)
            .map_err(provider_failure(&speaker_name))?;
        let target = Self::checked_selection(&speaker_name, &decision, &valid_targets)?;
        info!(round, werewolf = %speaker_name, target = %target, "werewolves chose a target");

        let werewolves: Vec<Value> = self
            .roster
            .alive_with_role(Role::Werewolf)
            .map(|p| Value::from(p.name()))
            .collect();
        let mut details = decision.into_details();
        details.insert(keys::WEREWOLVES.into(), Value::Array(werewolves));
        details.insert(keys::TARGET.into(), Value::from(target.as_str()));
        self.log.append(round, Phase::Night, EventType::WwTarget, details);

        let Some(victim) = self.roster.position(&target) else {
            return Ok(());
        };
        match self.roster.player(speaker).night_action(Some(self.roster.player(victim))) {
            NightAction::Target(_) => {
                self.eliminate(victim, Phase::Night, reasons::WEREWOLF_ATTACK, None);
            }
            NightAction::NoAction(reason) => {
                info!(round, %reason, "no one was eliminated last night");
            }
        }
        Ok(())
    }

    /// Run the day: everyone alive speaks, then everyone alive votes.
    ///
    /// A single plurality is cast out. Ties and empty tallies eliminate
    /// nobody. Every voter sees the same pre-vote state. Same state
    /// requirement as [`Moderator::night_phase`].
    pub fn day_phase(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.state = GameState::Day;
        self.last_eliminated = None;
        let round = self.round_number;

        let living = self.roster.alive_indices(|_| true);
        if living.is_empty() {
            return Ok(());
        }

        for &index in &living {
            let player = self.roster.player(index);
            let (name, role) = (player.name().to_string(), player.role());
            let context = self.game_context(Some(player));

            let decision = self
                .roster
                .seat_mut(index)
                .request_discussion(&context)
                .map_err(provider_failure(&name))?;
            let text = decision.final_decision.clone();
            debug!(round, speaker = %name, %text, "discussion");

            let mut details = decision.into_details();
            details.insert(keys::SPEAKER.into(), Value::from(name));
            details.insert(keys::ROLE.into(), Value::from(role.name()));
            details.insert(keys::TEXT.into(), Value::from(text));
            self.log.append(round, Phase::Day, EventType::Discussion, details);
        }

        let valid_targets: Vec<String> = living
            .iter()
            .map(|&i| self.roster.player(i).name().to_string())
            .collect();
        let mut tally = VoteTally::new();

        for &index in &living {
            let voter = self.roster.player(index);
            let name = voter.name().to_string();
            let context = self.game_context(Some(voter));

            let decision = self
                .roster
                .seat_mut(index)
                .request_target_selection(&context, &valid_targets)
                .map_err(provider_failure(&name))?;
            let target = Self::checked_selection(&name, &decision, &valid_targets)?;
            debug!(round, voter = %name, target = %target, "vote");

            let mut details = decision.into_details();
            details.insert(keys::VOTER.into(), Value::from(name));
            details.insert(keys::TARGET.into(), Value::from(target.as_str()));
            self.log.append(round, Phase::Day, EventType::Vote, details);

            tally.record(&target);
        }

        debug!(round, cast = tally.total(), "votes counted");
        match tally.resolve() {
            TallyOutcome::NoVotes => info!(round, "no votes were cast"),
            TallyOutcome::Tie { names, votes } => {
                info!(round, votes, tied = ?names, "tie vote, no one is cast out");
            }
            TallyOutcome::Decided { name, votes } => {
                if let Some(index) = self.roster.position(&name) {
                    self.eliminate(index, Phase::Day, reasons::TOWN_LYNCH, Some(votes));
                }
            }
        }
        Ok(())
    }

    /// Eliminate the player at `index` and record it. Returns whether the
    /// player was alive.
    fn eliminate(&mut self, index: usize, phase: Phase, reason: &str, votes: Option<u32>) -> bool {
        let round = self.round_number;
        let player = self.roster.player_mut(index);

        if player.eliminate(round) == Elimination::AlreadyEliminated {
            debug!(round, player = %player.name(), "already eliminated");
            return false;
        }

        let name = player.name().to_string();
        let role = player.role();
        info!(round, %phase, player = %name, %role, reason, "player eliminated");

        let mut details = Details::new();
        details.insert(keys::PLAYER.into(), Value::from(name.as_str()));
        details.insert(keys::ROLE.into(), Value::from(role.name()));
        details.insert(keys::REASON.into(), Value::from(reason));
        if let Some(votes) = votes {
            details.insert(keys::VOTES_FOR.into(), Value::from(votes));
        }
        self.log.append(round, phase, EventType::Elimination, details);

        self.last_eliminated = Some(name);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{GameError, GameState, Player, Role, Roster, Seat};
    use crate::decision::ScriptedProvider;
    use crate::events::{EventType, Phase};
    use crate::moderator::Moderator;

    #[test]
    fn test_eliminate_twice_logs_once() {
        let mut roster = Roster::new(vec![
            Seat::new(Player::new("W", Role::Werewolf), ScriptedProvider::new()),
            Seat::new(Player::new("A", Role::Villager), ScriptedProvider::new()),
        ])
        .unwrap();
        let mut moderator = Moderator::new(&mut roster);
        moderator.round_number = 1;

        assert!(moderator.eliminate(1, Phase::Day, "test", Some(2)));
        assert!(!moderator.eliminate(1, Phase::Day, "test", Some(2)));

        assert_eq!(moderator.log().of_type(EventType::Elimination).count(), 1);
        assert_eq!(moderator.last_eliminated(), Some("A"));
        let entry = moderator.log().last().unwrap();
        assert_eq!(entry.details()["votes_for"], 2);
        assert_eq!(entry.detail_str("reason"), Some("test"));
    }

    #[test]
    fn test_night_with_only_werewolves_does_nothing() {
        let mut roster = Roster::new(vec![
            Seat::new(Player::new("W1", Role::Werewolf), ScriptedProvider::new()),
            Seat::new(Player::new("W2", Role::Werewolf), ScriptedProvider::new()),
        ])
        .unwrap();
        let mut moderator = Moderator::new(&mut roster);
        moderator.start().unwrap();

        moderator.night_phase().unwrap();

        assert_eq!(moderator.state(), GameState::Night);
        assert!(moderator.log().is_empty());
        assert!(moderator.roster().players().all(Player::is_alive));
    }

    #[test]
    fn test_night_without_werewolves_does_nothing() {
        let mut roster = Roster::new(vec![
            Seat::new(Player::new("W", Role::Werewolf), ScriptedProvider::new()),
            Seat::new(Player::new("A", Role::Villager), ScriptedProvider::new()),
            Seat::new(Player::new("B", Role::Villager), ScriptedProvider::new()),
        ])
        .unwrap();
        let mut moderator = Moderator::new(&mut roster);
        moderator.start().unwrap();
        moderator.round_number = 1;
        moderator.eliminate(0, Phase::Day, "test", None);
        let before = moderator.log().len();

        moderator.night_phase().unwrap();

        assert_eq!(moderator.log().len(), before);
        assert!(moderator.last_eliminated().is_none());
        let alive: Vec<&str> = moderator.roster().alive().map(Player::name).collect();
        assert_eq!(alive, vec!["A", "B"]);
    }

    #[test]
    fn test_phases_require_a_running_game() {
        let mut roster = Roster::new(vec![
            Seat::new(Player::new("W", Role::Werewolf), ScriptedProvider::new()),
            Seat::new(Player::new("A", Role::Villager), ScriptedProvider::new()),
            Seat::new(Player::new("B", Role::Villager), ScriptedProvider::new()),
        ])
        .unwrap();
        let mut moderator = Moderator::new(&mut roster);

        assert!(matches!(
            moderator.night_phase(),
            Err(GameError::NotRunning(GameState::Setup))
        ));
        assert!(matches!(
            moderator.day_phase(),
            Err(GameError::NotRunning(GameState::Setup))
        ));
        assert_eq!(moderator.state(), GameState::Setup);
    }
}
