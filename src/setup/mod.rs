//! Table setup: naming seats, dealing roles, and attaching providers.
//!
//! Setup happens once, before any moderator exists:
//! - werewolves = max(1, players / 4), the rest villagers
//! - roles are shuffled with the configured seed
//! - the first `human_count` seats are flagged for human providers

mod deal;

pub use deal::{build_roster, deal_roles, plan_seats, player_names, SeatPlan};
