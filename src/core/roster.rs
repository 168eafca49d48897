//! The ordered list of seats in a game.
//!
//! Roster order is significant: it fixes who speaks and votes first and which
//! werewolf speaks for the pack at night.

use rustc_hash::FxHashSet;

use super::error::SetupError;
use super::player::{Player, Seat};
use super::role::Role;

/// Seats in fixed order with unique player names.
#[derive(Debug)]
pub struct Roster {
    seats: Vec<Seat>,
}

impl Roster {
    /// Create a roster, rejecting empty rosters and duplicate names.
    pub fn new(seats: Vec<Seat>) -> Result<Self, SetupError> {
        if seats.is_empty() {
            return Err(SetupError::EmptyRoster);
        }

        let mut seen = FxHashSet::default();
        for seat in &seats {
            let name = seat.player().name();
            if !seen.insert(name) {
                return Err(SetupError::DuplicateName(name.to_string()));
            }
        }

        Ok(Self { seats })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Iterate over all players in roster order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().map(Seat::player)
    }

    /// Iterate over living players in roster order.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players().filter(|p| p.is_alive())
    }

    /// Living players with the given role, in roster order.
    pub fn alive_with_role(&self, role: Role) -> impl Iterator<Item = &Player> {
        self.alive().filter(move |p| p.role() == role)
    }

    /// Roster indices of living players matching `pred`.
    #[must_use]
    pub fn alive_indices(&self, pred: impl Fn(&Player) -> bool) -> Vec<usize> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.player().is_alive() && pred(s.player()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Count of living werewolves and living non-werewolves.
    #[must_use]
    pub fn alive_counts(&self) -> (usize, usize) {
        self.alive().fold((0, 0), |(w, v), p| {
            if p.role().is_werewolf() {
                (w + 1, v)
            } else {
                (w, v + 1)
            }
        })
    }

    /// Roster index of the player with this name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.seats.iter().position(|s| s.player().name() == name)
    }

    /// Player by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players().find(|p| p.name() == name)
    }

    /// Player at a roster index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn player(&self, index: usize) -> &Player {
        self.seats[index].player()
    }

    pub(crate) fn player_mut(&mut self, index: usize) -> &mut Player {
        self.seats[index].player_mut()
    }

    /// Seat at a roster index, for forwarding decision requests.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn seat_mut(&mut self, index: usize) -> &mut Seat {
        &mut self.seats[index]
    }

    /// Restore every player to alive with no elimination round.
    ///
    /// Used between independent games on the same roster. A moderator never
    /// calls this; it is the caller's job.
    pub fn reset(&mut self) {
        for seat in &mut self.seats {
            seat.player_mut().restore();
        }
    }
}
