//! Roles and their night abilities.
//!
//! Roles are a closed set. Behaviour that differs per role (currently only
//! the night action) is resolved by matching on [`Role`] rather than through
//! a player type hierarchy, so [`Player`] stays a plain data aggregate.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A player's hidden allegiance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Villager,
    Werewolf,
}

impl Role {
    /// Human-readable role name, also used in logs and exports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Villager => "Villager",
            Role::Werewolf => "Werewolf",
        }
    }

    #[must_use]
    pub const fn is_werewolf(self) -> bool {
        matches!(self, Role::Werewolf)
    }

    /// Resolve `actor`'s night ability against an optional target.
    ///
    /// Never mutates anything: a proposed elimination is carried out by the
    /// moderator.
    #[must_use]
    pub fn night_action(self, actor: &Player, target: Option<&Player>) -> NightAction {
        if !actor.is_alive() {
            return NightAction::NoAction(format!(
                "{} is eliminated and has no night action.",
                actor.name()
            ));
        }

        match self {
            Role::Villager => passive_night(actor),
            Role::Werewolf => werewolf_night(actor, target),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a role's night ability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NightAction {
    /// Nothing happens; the message describes why.
    NoAction(String),
    /// The actor proposes this player (by name) for elimination.
    Target(String),
}

fn passive_night(actor: &Player) -> NightAction {
    NightAction::NoAction(format!(
        "{} {} has no special night action.",
        actor.role(),
        actor.name()
    ))
}

fn werewolf_night(actor: &Player, target: Option<&Player>) -> NightAction {
    match target {
        Some(victim) if victim.is_alive() && !victim.role().is_werewolf() => {
            NightAction::Target(victim.name().to_string())
        }
        Some(victim) => NightAction::NoAction(format!(
            "Werewolf {} cannot attack {}.",
            actor.name(),
            victim.name()
        )),
        None => NightAction::NoAction(format!("Werewolf {} chose no target.", actor.name())),
    }
}
