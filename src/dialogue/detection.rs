//! Stage 2: symptom detection in the current message.

use super::vocabulary::Vocabulary;

/// Find vocabulary symptoms mentioned in the message, in vocabulary order.
///
/// Case-insensitive substring containment, no word-boundary checks: an
/// entry matching inside a longer word still counts. Trades precision for
/// recall; the stricter word-boundary variant is an open question.
pub fn detect_symptoms(message: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let lowercase_message = message.to_lowercase();
    vocabulary
        .symptoms()
        .iter()
        .filter(|symptom| lowercase_message.contains(symptom.as_str()))
        .cloned()
        .collect()
}
