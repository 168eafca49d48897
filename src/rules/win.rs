//! Win condition.

use serde::{Deserialize, Serialize};

use crate::core::Roster;

/// The winning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Villagers,
    Werewolves,
}

impl Winner {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Winner::Villagers => "Villagers",
            Winner::Werewolves => "Werewolves",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the game from living head counts.
///
/// - no werewolves left: villagers win
/// - werewolves at least as many as everyone else: werewolves win
/// - otherwise the game goes on
#[must_use]
pub fn evaluate(werewolves: usize, villagers: usize) -> Option<Winner> {
    if werewolves == 0 {
        Some(Winner::Villagers)
    } else if werewolves >= villagers {
        Some(Winner::Werewolves)
    } else {
        None
    }
}

/// [`evaluate`] over the living players of a roster.
#[must_use]
pub fn evaluate_roster(roster: &Roster) -> Option<Winner> {
    let (werewolves, villagers) = roster.alive_counts();
    evaluate(werewolves, villagers)
}
