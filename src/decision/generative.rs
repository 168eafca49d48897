//! Providers backed by free-text generation.
//!
//! A [`TextGenerator`] turns a prompt into text; [`GenerativeProvider`] builds
//! the prompts and maps generated text onto a valid target with
//! [`match_target`]. Real language models plug in by implementing
//! `TextGenerator`; [`BabbleGenerator`] is a seeded offline stand-in.

use tracing::{debug, instrument, warn};

use super::{DecisionProvider, DecisionResult, GameContext, ProviderError};
use crate::core::GameRng;

/// Anything that can complete a prompt.
pub trait TextGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, ProviderError>;
}

/// Pick the target named in `output`.
///
/// Case-insensitive substring match, first valid target (in order) found in
/// the text wins. Falls back to the first valid target when none is named.
/// Best effort: if several names appear, order of `valid_targets` decides,
/// not order in the text. Returns `None` only for an empty target list.
#[must_use]
pub fn match_target<'a>(output: &str, valid_targets: &'a [String]) -> Option<&'a str> {
    named_target(output, valid_targets).or_else(|| valid_targets.first().map(String::as_str))
}

/// The first valid target named in `output`, without the fallback.
fn named_target<'a>(output: &str, valid_targets: &'a [String]) -> Option<&'a str> {
    let haystack = output.to_lowercase();
    valid_targets
        .iter()
        .find(|t| haystack.contains(&t.to_lowercase()))
        .map(String::as_str)
}

/// Provider that asks a [`TextGenerator`] for everything.
pub struct GenerativeProvider<G> {
    name: String,
    generator: G,
}

impl<G: TextGenerator> GenerativeProvider<G> {
    pub fn new(name: impl Into<String>, generator: G) -> Self {
        Self {
            name: name.into(),
            generator,
        }
    }

    fn role_label(context: &GameContext) -> &'static str {
        context.role.map_or("player", |r| r.name())
    }

    fn discussion_prompt(&self, context: &GameContext) -> String {
        format!(
            "You are playing the game Werewolf as a {} named {}. The current status is: {}. \
             Who do you suspect and what do you say to the group?",
            Self::role_label(context),
            self.name,
            context.status
        )
    }

    fn selection_prompt(&self, context: &GameContext, targets: &[String]) -> String {
        format!(
            "You are a {} named {}. You must select one person to eliminate. \
             The options are: {}. Based on the context: {}, who do you select? \
             Respond ONLY with the name.",
            Self::role_label(context),
            self.name,
            targets.join(", "),
            context.status
        )
    }

    fn complete(&mut self, prompt: String) -> Result<DecisionResult, ProviderError> {
        let raw = self.generator.generate(&prompt)?;
        Ok(DecisionResult::new(raw.trim())
            .with_field("source", "LLM")
            .with_field("prompt_used", prompt)
            .with_field("raw_llm_output", raw))
    }
}

impl<G: TextGenerator> DecisionProvider for GenerativeProvider<G> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn discussion_text(&mut self, context: &GameContext) -> Result<DecisionResult, ProviderError> {
        let prompt = self.discussion_prompt(context);
        self.complete(prompt)
    }

    #[instrument(skip_all, fields(player = %self.name))]
    fn target_selection(
        &mut self,
        context: &GameContext,
        valid_targets: &[String],
    ) -> Result<DecisionResult, ProviderError> {
        let prompt = self.selection_prompt(context, valid_targets);
        let mut result = self.complete(prompt)?;

        if named_target(&result.final_decision, valid_targets).is_none() {
            warn!(
                generated = %result.final_decision,
                "no valid target named, falling back to the first"
            );
        }
        let chosen = match_target(&result.final_decision, valid_targets)
            .ok_or(ProviderError::NoTargets)?
            .to_string();
        debug!(generated = %result.final_decision, chosen = %chosen, "parsed selection");

        result.final_decision = chosen;
        Ok(result)
    }
}

const OPENERS: &[&str] = &[
    "I have a bad feeling about",
    "Nobody is watching",
    "Something is off with",
    "I would trust",
    "Keep an eye on",
    "My vote goes to",
];

const FILLER: &[&str] = &[
    "tonight", "honestly", "the", "village", "is", "quiet", "too", "quiet", "and", "I", "heard",
    "howling", "near", "the", "well",
];

/// Seeded offline generator that strings together short phrases and names.
///
/// It knows the table's names but not who is alive, so selections still go
/// through [`match_target`] and its fallback.
#[derive(Clone, Debug)]
pub struct BabbleGenerator {
    rng: GameRng,
    names: Vec<String>,
    max_words: usize,
}

impl BabbleGenerator {
    pub fn new(rng: GameRng, names: Vec<String>, max_words: usize) -> Self {
        Self {
            rng,
            names,
            max_words: max_words.max(1),
        }
    }
}

impl TextGenerator for BabbleGenerator {
    fn generate(&mut self, _prompt: &str) -> Result<String, ProviderError> {
        let mut words: Vec<&str> = Vec::new();

        if let Some(opener) = self.rng.choose(OPENERS) {
            words.push(opener);
        }
        if let Some(name) = self.rng.choose(&self.names) {
            words.push(name);
        }
        let extra = self.rng.below(self.max_words);
        for _ in 0..extra {
            if let Some(word) = self.rng.choose(FILLER) {
                words.push(word);
            }
        }

        let mut text = words.join(" ");
        text.push(if self.rng.chance(0.3) { '!' } else { '.' });
        Ok(text)
    }
}
