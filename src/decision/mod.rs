//! Decision providers: whoever (or whatever) speaks and chooses for a player.
//!
//! The moderator only ever talks to a [`DecisionProvider`]. Concrete
//! providers live in the submodules:
//!
//! - [`HumanProvider`]: terminal input, shared stdin through [`SharedStdin`]
//! - [`GenerativeProvider`]: text generation behind a [`TextGenerator`]
//! - [`ScriptedProvider`]: closures, for tests and embedding
//!
//! Calls are synchronous and may block for as long as the provider needs.

mod generative;
mod human;
mod scripted;

pub use generative::{match_target, BabbleGenerator, GenerativeProvider, TextGenerator};
pub use human::{HumanProvider, LineInput, SharedStdin};
pub use scripted::ScriptedProvider;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::{GameState, Role};

/// Key under which the decision itself is stored in log details.
pub const FINAL_DECISION: &str = "final_decision";

/// What a provider decided, plus whatever it wants recorded alongside.
///
/// The extra fields (source tag, prompt, raw output, ...) are opaque to the
/// moderator and copied verbatim into the event log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub final_decision: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DecisionResult {
    pub fn new(final_decision: impl Into<String>) -> Self {
        Self {
            final_decision: final_decision.into(),
            extra: Map::new(),
        }
    }

    /// Attach a passthrough field (builder pattern).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The provider's `source` tag, if it set one.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.extra.get("source").and_then(Value::as_str)
    }

    /// Flatten into a details map for the event log.
    #[must_use]
    pub fn into_details(self) -> Map<String, Value> {
        let mut details = self.extra;
        details.insert(FINAL_DECISION.to_string(), Value::String(self.final_decision));
        details
    }
}

/// An eliminated player as shown to providers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminatedPlayer {
    pub name: String,
    pub role: Role,
    pub round: Option<u32>,
}

/// Read-only snapshot of the game handed to a provider for one request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    pub round_number: u32,
    pub game_state: GameState,
    pub alive_players: Vec<String>,
    pub eliminated_players: Vec<EliminatedPlayer>,
    pub last_eliminated: Option<String>,
    pub status: String,

    /// Set when the snapshot is built for a specific player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Failure inside a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("I/O error while waiting for a decision")]
    Io(#[from] std::io::Error),
    #[error("input closed before a decision was made")]
    InputClosed,
    #[error("no valid targets were offered")]
    NoTargets,
    #[error("text generation failed: {0}")]
    Generation(String),
}

/// Produces discussion text and target selections for one player.
pub trait DecisionProvider {
    /// What the player says during the day. Content is unconstrained.
    fn discussion_text(&mut self, context: &GameContext) -> Result<DecisionResult, ProviderError>;

    /// Pick one of `valid_targets` (non-empty, ordered).
    ///
    /// `final_decision` must be a member of `valid_targets`; providers parse
    /// and validate their own output and fall back deterministically.
    fn target_selection(
        &mut self,
        context: &GameContext,
        valid_targets: &[String],
    ) -> Result<DecisionResult, ProviderError>;
}

impl<P: DecisionProvider + ?Sized> DecisionProvider for Box<P> {
    fn discussion_text(&mut self, context: &GameContext) -> Result<DecisionResult, ProviderError> {
        (**self).discussion_text(context)
    }

    fn target_selection(
        &mut self,
        context: &GameContext,
        valid_targets: &[String],
    ) -> Result<DecisionResult, ProviderError> {
        (**self).target_selection(context, valid_targets)
    }
}
