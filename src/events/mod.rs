//! Structured game events.
//!
//! The [`EventLog`] is the game's record of what happened, independent of how
//! it is later written out. Diagnostic output goes through `tracing` instead.

mod entry;
mod log;

pub use self::entry::{Details, EventType, LogEntry, Phase};
pub use self::log::EventLog;

/// Conventional detail keys per [`EventType`].
///
/// | event type    | keys                                              |
/// |---------------|---------------------------------------------------|
/// | `WW_TARGET`   | provider fields, `werewolves`, `target`           |
/// | `ELIMINATION` | `player`, `role`, `reason`, day only: `votes_for` |
/// | `DISCUSSION`  | provider fields, `speaker`, `role`, `text`        |
/// | `VOTE`        | provider fields, `voter`, `target`                |
pub mod keys {
    pub const WEREWOLVES: &str = "werewolves";
    pub const TARGET: &str = "target";
    pub const PLAYER: &str = "player";
    pub const ROLE: &str = "role";
    pub const REASON: &str = "reason";
    pub const VOTES_FOR: &str = "votes_for";
    pub const SPEAKER: &str = "speaker";
    pub const TEXT: &str = "text";
    pub const VOTER: &str = "voter";
}

/// Elimination reasons.
pub mod reasons {
    pub const WEREWOLF_ATTACK: &str = "Werewolf Attack";
    pub const TOWN_LYNCH: &str = "Town Lynch";
}
