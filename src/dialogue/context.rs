//! Stage 1: reconstruct cumulative dialogue state from raw turn history.
//!
//! The engine is stateless between calls; everything it "remembers" is
//! parsed back out of its own earlier replies. A pure reduction over the
//! turn slice — no side effects, no mutation of caller-owned history.

use std::sync::LazyLock;

use regex::Regex;

use super::messages::ResponseTemplates;
use super::types::{DialogueContext, Turn};
use super::vocabulary::Vocabulary;

/// Captures the comma-separated symptom list between the detection marker
/// and the first period. Built from the marker constant so the template
/// and the parser cannot drift apart.
static DETECTED_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{} (.*?)\.",
        regex::escape(ResponseTemplates::DETECTED_MARKER)
    ))
    .unwrap()
});

/// Reconstructs `DialogueContext` from history.
///
/// Trait seam: the marker-scanning implementation below couples state
/// recovery to reply text. A caller that records structured per-turn
/// metadata can swap in its own extractor without touching the public
/// analyze contract.
pub trait ContextExtractor: Send + Sync {
    fn extract(&self, history: &[Turn], vocabulary: &Vocabulary) -> DialogueContext;
}

/// Marker-phrase extractor: scans bot replies for the exact phrases in
/// `ResponseTemplates` and parses prior detections back out.
#[derive(Debug, Default)]
pub struct MarkerContextExtractor;

impl ContextExtractor for MarkerContextExtractor {
    fn extract(&self, history: &[Turn], vocabulary: &Vocabulary) -> DialogueContext {
        let mut context = DialogueContext::default();

        for turn in history {
            let bot_text = turn.bot_text.as_str();
            if bot_text.is_empty() {
                continue;
            }

            // Accumulate symptoms the bot acknowledged in earlier turns.
            // An empty capture (marker present, nothing before the period)
            // skips this turn's contribution rather than failing.
            if let Some(caps) = DETECTED_LIST_RE.captures(bot_text) {
                let list = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                if !list.is_empty() {
                    for name in list.split(", ") {
                        // Only vocabulary entries survive: keeps
                        // detected_symptoms ⊆ vocabulary even for
                        // hand-edited histories.
                        if vocabulary.contains(name) {
                            context.add_symptom(name);
                        }
                    }
                }
            }

            // Track the question the user may be answering; the last
            // occurrence wins.
            if ResponseTemplates::QUESTION_MARKERS
                .iter()
                .any(|marker| bot_text.contains(marker))
            {
                context.last_question = Some(bot_text.to_string());
            }
        }

        context
    }
}
