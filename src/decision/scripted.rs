//! Deterministic provider driven by closures.

use super::{DecisionProvider, DecisionResult, GameContext, ProviderError};

type SpeechFn = Box<dyn FnMut(&GameContext) -> String>;
type ChoiceFn = Box<dyn FnMut(&GameContext, &[String]) -> String>;

/// Provider whose answers come from closures.
///
/// By default it says `"..."` and picks the first valid target. Whatever the
/// choice closure returns is passed through unchecked, which makes it useful
/// for exercising the moderator's handling of bad selections.
///
/// ```
/// use werewolf_sim::decision::{DecisionProvider, GameContext, ScriptedProvider};
///
/// let mut provider = ScriptedProvider::targeting("B");
/// let targets = vec!["A".to_string(), "B".to_string()];
/// let result = provider.target_selection(&GameContext::default(), &targets).unwrap();
/// assert_eq!(result.final_decision, "B");
/// ```
pub struct ScriptedProvider {
    speech: SpeechFn,
    choice: ChoiceFn,
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self {
            speech: Box::new(|_| "...".to_string()),
            choice: Box::new(|_, targets| targets.first().cloned().unwrap_or_default()),
        }
    }
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always pick `name` when it is offered, otherwise the first target.
    pub fn targeting(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new().choosing(move |_, targets| {
            if targets.contains(&name) {
                name.clone()
            } else {
                targets.first().cloned().unwrap_or_default()
            }
        })
    }

    /// Set the discussion closure (builder pattern).
    #[must_use]
    pub fn saying(mut self, speech: impl FnMut(&GameContext) -> String + 'static) -> Self {
        self.speech = Box::new(speech);
        self
    }

    /// Set the selection closure (builder pattern).
    #[must_use]
    pub fn choosing(
        mut self,
        choice: impl FnMut(&GameContext, &[String]) -> String + 'static,
    ) -> Self {
        self.choice = Box::new(choice);
        self
    }
}

impl DecisionProvider for ScriptedProvider {
    fn discussion_text(&mut self, context: &GameContext) -> Result<DecisionResult, ProviderError> {
        Ok(DecisionResult::new((self.speech)(context)).with_field("source", "Scripted"))
    }

    fn target_selection(
        &mut self,
        context: &GameContext,
        valid_targets: &[String],
    ) -> Result<DecisionResult, ProviderError> {
        Ok(DecisionResult::new((self.choice)(context, valid_targets)).with_field("source", "Scripted"))
    }
}
