//! Stage 4: condition ranking and response composition.

use super::messages::ResponseTemplates;
use super::types::Condition;
use super::vocabulary::rule_for;

/// Collect condition candidates for the accumulated symptoms.
///
/// The name is the dedup key: a condition contributed by several symptom
/// rules keeps its highest score. Sorted descending by score; the sort is
/// stable, so ties keep first-appearance order.
pub fn rank_conditions(all_symptoms: &[String]) -> Vec<Condition> {
    let mut conditions: Vec<Condition> = Vec::new();

    for symptom in all_symptoms {
        let Some(rule) = rule_for(symptom) else {
            continue;
        };
        for &(name, match_score) in rule.conditions {
            match conditions.iter_mut().find(|c| c.name == name) {
                Some(existing) => {
                    if match_score > existing.match_score {
                        existing.match_score = match_score;
                    }
                }
                None => conditions.push(Condition {
                    name: name.to_string(),
                    match_score,
                }),
            }
        }
    }

    conditions.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    conditions
}

/// Assemble the final reply text.
///
/// `fragment` is the stage-3 short-answer reply, if any; `suppress_invite`
/// is set when the user just answered a pending question, so the engine
/// does not immediately ask another one.
pub fn compose_response(
    all_symptoms: &[String],
    fragment: Option<String>,
    suppress_invite: bool,
) -> String {
    if all_symptoms.is_empty() {
        // Nothing to elaborate on — even after a short answer, fall back
        // to the clarifying prompt.
        return ResponseTemplates::CLARIFY_SYMPTOMS.to_string();
    }

    let mut response =
        fragment.unwrap_or_else(|| ResponseTemplates::detected(&all_symptoms.join(", ")));

    for symptom in all_symptoms {
        if let Some(rule) = rule_for(symptom) {
            response.push_str(rule.info);
        }
    }

    if !suppress_invite {
        response.push_str(ResponseTemplates::DETAILS_INVITE);
    }

    response
}
