//! Game rules that do not depend on sequencing.
//!
//! - Win condition from living head counts
//! - Day vote tallying and tie resolution
//!
//! Both are pure; the moderator decides when to apply them.

pub mod tally;
pub mod win;

pub use tally::{TallyOutcome, VoteTally};
pub use win::{evaluate, evaluate_roster, Winner};
