//! Stage 3: interpret short replies to a pending follow-up question.
//!
//! A message under four tokens while a question is pending is treated as
//! an answer to that question, not as a fresh symptom description. This
//! stage only proposes reply text; it never touches accumulated symptoms.

use std::sync::LazyLock;

use regex::Regex;

use super::messages::ResponseTemplates;

/// `\d+` followed by a day/week/month/year unit.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(day|days|week|weeks|month|months|year|years)").unwrap()
});

/// A single digit 1-3 followed by "day"/"days": the acute range.
static FEW_DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[123]\s*days?").unwrap());

/// Messages under this many whitespace-delimited tokens are treated as
/// answers to a pending question.
pub const SHORT_ANSWER_TOKEN_LIMIT: usize = 4;

pub fn is_short_answer(message: &str) -> bool {
    message.split_whitespace().count() < SHORT_ANSWER_TOKEN_LIMIT
}

/// Build the reply fragment for a short answer to `last_question`.
///
/// Returns `None` when the message is not short or no question is
/// pending; stage 4 then composes the primary response instead.
pub fn interpret_short_answer(
    message: &str,
    last_question: Option<&str>,
    all_symptoms: &[String],
) -> Option<String> {
    let question = last_question?;
    if !is_short_answer(message) {
        return None;
    }

    if question.contains("how long") && DURATION_RE.is_match(message) {
        let mut response = ResponseTemplates::duration_ack(message.trim());

        if FEW_DAYS_RE.is_match(message) {
            response.push_str(ResponseTemplates::SHORT_DURATION_ADVICE);
        } else {
            response.push_str(ResponseTemplates::LONG_DURATION_ADVICE);
        }

        if !all_symptoms.is_empty() {
            response.push_str(&ResponseTemplates::symptom_transition(
                &all_symptoms.join(", "),
            ));
        }

        Some(response)
    } else {
        Some(ResponseTemplates::GENERIC_ACK.to_string())
    }
}
