//! Rule-based symptom dialogue engine.
//!
//! Four cooperating pure stages: context extraction from history,
//! symptom detection in the current message, short-answer follow-up
//! interpretation, and condition ranking + response composition. The
//! engine holds no state between calls — everything it "knows" is
//! reconstructed from the history the caller passes in, so `analyze` can
//! run concurrently from any number of callers.
//!
//! `analyze` is infallible: malformed history skips the offending turn,
//! an empty message gets the clarifying prompt, and the result is always
//! well-formed.

pub mod composer;
pub mod context;
pub mod detection;
pub mod followup;
pub mod messages;
pub mod types;
pub mod vocabulary;

pub use context::{ContextExtractor, MarkerContextExtractor};
pub use types::{Condition, DialogueContext, DialogueResult, Turn};
pub use vocabulary::Vocabulary;

use messages::ResponseTemplates;

/// The dialogue engine contract: one message plus complete history in,
/// one well-formed result out.
pub trait DialogueEngine {
    fn analyze(&self, message: &str, history: &[Turn]) -> DialogueResult;
}

/// Default implementation: marker-based context extraction over the
/// built-in (or provided) symptom vocabulary.
pub struct DefaultDialogueEngine {
    vocabulary: Vocabulary,
    extractor: Box<dyn ContextExtractor>,
}

impl DefaultDialogueEngine {
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::builtin())
    }

    /// Engine over an externally provided symptom list.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            extractor: Box::new(MarkerContextExtractor),
        }
    }

    /// Swap the context extraction strategy.
    pub fn with_extractor(mut self, extractor: Box<dyn ContextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Default for DefaultDialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueEngine for DefaultDialogueEngine {
    fn analyze(&self, message: &str, history: &[Turn]) -> DialogueResult {
        let context = self.extractor.extract(history, &self.vocabulary);
        let current_symptoms = detection::detect_symptoms(message, &self.vocabulary);

        // History-derived symptoms first, then new ones, duplicates
        // collapsed.
        let mut all_symptoms = context.detected_symptoms.clone();
        for symptom in current_symptoms {
            if !all_symptoms.contains(&symptom) {
                all_symptoms.push(symptom);
            }
        }

        let fragment = followup::interpret_short_answer(
            message,
            context.last_question.as_deref(),
            &all_symptoms,
        );

        // Right after a short answer to a pending question, don't
        // immediately ask the open-ended invite again.
        let answered_pending_question =
            context.last_question.is_some() && followup::is_short_answer(message);

        let response =
            composer::compose_response(&all_symptoms, fragment, answered_pending_question);
        let possible_conditions = composer::rank_conditions(&all_symptoms);

        DialogueResult {
            response,
            detected_symptoms: all_symptoms,
            possible_conditions,
            follow_up_question: ResponseTemplates::FOLLOW_UP_QUESTION.to_string(),
        }
    }
}
