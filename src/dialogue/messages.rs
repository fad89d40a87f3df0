//! Every literal phrase the engine emits or scans for.
//!
//! The context extractor recovers prior state by matching bot replies
//! against these exact strings, so reply templates and parser must stay
//! in sync. Keep them in one place.

/// Response phrase builder.
pub struct ResponseTemplates;

impl ResponseTemplates {
    /// Prefix of the symptom summary; the extractor parses it back out of
    /// bot replies on later turns.
    pub const DETECTED_MARKER: &'static str = "I've detected that you're experiencing";

    /// Bot phrases that count as a pending follow-up question.
    pub const QUESTION_MARKERS: [&'static str; 3] = [
        "how long have you been experiencing",
        "Would you like to provide more details",
        "Could you describe",
    ];

    /// Constant follow-up question attached to every result.
    pub const FOLLOW_UP_QUESTION: &'static str =
        "How long have you been experiencing these symptoms?";

    /// Acknowledgment for short answers that are not duration phrases.
    pub const GENERIC_ACK: &'static str = "Thank you for that information. ";

    /// Advice branch for durations in the acute (few days) range.
    pub const SHORT_DURATION_ADVICE: &'static str =
        "For symptoms lasting a few days, it could be an acute condition. \
         Rest, hydration, and over-the-counter medications may help manage symptoms. ";

    /// Advice branch for longer durations.
    pub const LONG_DURATION_ADVICE: &'static str =
        "For symptoms lasting longer, it's advisable to consult with a healthcare provider. \
         Persistent symptoms may require professional evaluation. ";

    /// Reply when no symptoms are known yet.
    pub const CLARIFY_SYMPTOMS: &'static str =
        "I understand you're not feeling well. Could you please describe your symptoms \
         in more detail? For example, do you have a fever, cough, or headache?";

    /// Open-ended invite appended unless the user just answered a question.
    pub const DETAILS_INVITE: &'static str =
        "\n\nWould you like to provide more details about your symptoms? \
         For example, how long have you been experiencing them?";

    /// Symptom summary: "I've detected that you're experiencing a, b. "
    pub fn detected(symptoms_joined: &str) -> String {
        format!("{} {}. ", Self::DETECTED_MARKER, symptoms_joined)
    }

    /// Acknowledgment echoing the user's duration answer verbatim.
    pub fn duration_ack(duration: &str) -> String {
        format!(
            "Thank you for sharing that you've been experiencing symptoms for {}. ",
            duration
        )
    }

    /// Transition from duration advice back to the accumulated symptoms.
    pub fn symptom_transition(symptoms_joined: &str) -> String {
        format!(
            "\nBased on the symptoms you've mentioned ({}), \
             I'll provide some information about potential causes. ",
            symptoms_joined
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_summary_roundtrips_through_marker() {
        let summary = ResponseTemplates::detected("headache, fever");
        assert!(summary.starts_with(ResponseTemplates::DETECTED_MARKER));
        assert!(summary.ends_with(". "));
        assert!(summary.contains("headache, fever"));
    }

    #[test]
    fn details_invite_contains_a_question_marker() {
        assert!(ResponseTemplates::QUESTION_MARKERS
            .iter()
            .any(|marker| ResponseTemplates::DETAILS_INVITE.contains(marker)));
    }

    #[test]
    fn duration_ack_echoes_duration_verbatim() {
        let ack = ResponseTemplates::duration_ack("3 days");
        assert!(ack.contains("3 days"));
    }

    #[test]
    fn clarify_prompt_names_example_symptoms() {
        assert!(ResponseTemplates::CLARIFY_SYMPTOMS.contains("fever"));
        assert!(ResponseTemplates::CLARIFY_SYMPTOMS.contains("cough"));
        assert!(ResponseTemplates::CLARIFY_SYMPTOMS.contains("headache"));
    }
}
