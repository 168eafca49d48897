//! # werewolf-sim
//!
//! A moderator for the social-deduction game Werewolf.
//!
//! ## Design Principles
//!
//! 1. **Provider-Agnostic**: The moderator never knows who is playing. Every
//!    speech and every choice goes through a [`DecisionProvider`], whether a
//!    person at a terminal, a text generator, or a test script.
//!
//! 2. **Validate at the Boundary**: Provider selections are checked against
//!    the targets offered before the game acts on them.
//!
//! 3. **Append-Only History**: Everything that happens is recorded in an
//!    [`EventLog`] backed by `im-rs`, so copies are cheap.
//!
//! ## Modules
//!
//! - `core`: Players, roles, roster, game state, RNG, configuration, errors
//! - `decision`: The provider seam and its human, generative, and scripted implementations
//! - `events`: Structured event log
//! - `rules`: Vote tallying and win evaluation
//! - `moderator`: The round-by-round state machine
//! - `setup`: Seat naming, role dealing, roster construction
//! - `export`: JSON game summaries on disk
//! - `experiment`: Batches of games on one roster

pub mod core;
pub mod decision;
pub mod events;
pub mod experiment;
pub mod export;
pub mod moderator;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameState, NightAction, Player, Role, Roster, Seat,
    SetupError, MIN_PLAYERS,
};

pub use crate::decision::{
    DecisionProvider, DecisionResult, GameContext, GenerativeProvider, HumanProvider,
    ProviderError, ScriptedProvider, TextGenerator,
};

pub use crate::events::{EventLog, EventType, LogEntry, Phase};

pub use crate::rules::{TallyOutcome, VoteTally, Winner};

pub use crate::moderator::{GameSummary, Moderator};

pub use crate::experiment::{ExperimentConfig, ExperimentRunner, RunOutcome};
