//! Core types for the dialogue engine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Turn
// ---------------------------------------------------------------------------

/// One exchange unit (user message, bot message) in conversation history.
/// Either side may be empty to represent a pending turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub user_text: String,
    pub bot_text: String,
}

impl Turn {
    pub fn new(user_text: impl Into<String>, bot_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            bot_text: bot_text.into(),
        }
    }
}

/// Wire format carries turns as `[user_text, bot_text]` pairs.
impl From<(String, String)> for Turn {
    fn from((user_text, bot_text): (String, String)) -> Self {
        Self {
            user_text,
            bot_text,
        }
    }
}

// ---------------------------------------------------------------------------
// DialogueContext
// ---------------------------------------------------------------------------

/// Derived per-call state reconstructed from history on every call.
/// Never persisted by the engine itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueContext {
    /// Symptoms the bot already acknowledged in earlier turns.
    /// Insertion-ordered, duplicates collapsed (set semantics).
    pub detected_symptoms: Vec<String>,
    /// The most recent bot message that asked the user a question.
    pub last_question: Option<String>,
}

impl DialogueContext {
    /// Union a symptom into the set, preserving first-appearance order.
    pub fn add_symptom(&mut self, symptom: &str) {
        if !self.detected_symptoms.iter().any(|s| s == symptom) {
            self.detected_symptoms.push(symptom.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Condition & DialogueResult
// ---------------------------------------------------------------------------

/// A named candidate ailment with a confidence score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub match_score: f64,
}

/// The complete analysis result for one user message.
/// Serialized field names are the wire contract; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueResult {
    pub response: String,
    pub detected_symptoms: Vec<String>,
    /// Descending by match_score, no duplicate names.
    pub possible_conditions: Vec<Condition>,
    pub follow_up_question: String,
}
