//! Day vote counting.

use rustc_hash::FxHashMap;

/// How a day vote came out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TallyOutcome {
    /// Nobody voted.
    NoVotes,
    /// Several names share the top count; nobody is eliminated.
    Tie { names: Vec<String>, votes: u32 },
    /// A single name has the most votes.
    Decided { name: String, votes: u32 },
}

/// Running vote count, remembering the order names first received votes.
#[derive(Clone, Debug, Default)]
pub struct VoteTally {
    counts: FxHashMap<String, u32>,
    order: Vec<String>,
}

impl VoteTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one vote for `target`.
    pub fn record(&mut self, target: &str) {
        match self.counts.get_mut(target) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(target.to_string(), 1);
                self.order.push(target.to_string());
            }
        }
    }

    /// Votes received by `target`.
    #[must_use]
    pub fn count(&self, target: &str) -> u32 {
        self.counts.get(target).copied().unwrap_or(0)
    }

    /// Total votes cast.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Find the plurality. Tied names are listed in first-vote order.
    #[must_use]
    pub fn resolve(&self) -> TallyOutcome {
        let Some(max) = self.counts.values().copied().max() else {
            return TallyOutcome::NoVotes;
        };

        let mut leaders: Vec<String> = self
            .order
            .iter()
            .filter(|name| self.count(name) == max)
            .cloned()
            .collect();

        if leaders.len() > 1 {
            TallyOutcome::Tie {
                names: leaders,
                votes: max,
            }
        } else {
            TallyOutcome::Decided {
                name: leaders.remove(0),
                votes: max,
            }
        }
    }
}
