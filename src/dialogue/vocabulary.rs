//! Symptom vocabulary and the condition rule table.
//!
//! The vocabulary is the full set of symptom names the detector can find;
//! the rule table maps a subset of them to educational sentences and
//! condition candidates. Vocabulary entries without a rule are
//! detection-only: they show up in `detected_symptoms` but contribute
//! neither reply text nor conditions.

/// Built-in symptom vocabulary (the "medical database").
/// Lowercase, ordered; detection reports symptoms in this order.
const BUILTIN_SYMPTOMS: &[&str] = &[
    "headache",
    "fever",
    "cough",
    "fatigue",
    "shortness of breath",
    "sore throat",
    "muscle pain",
    "nausea",
    "dizziness",
    "chest pain",
    "stomachache",
    "rash",
    "joint pain",
    "chills",
    "weakness",
];

/// The fixed list of symptom names the engine recognizes.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    symptoms: Vec<String>,
}

impl Vocabulary {
    /// Built-in list, used when no external provider supplies one.
    pub fn builtin() -> Self {
        Self {
            symptoms: BUILTIN_SYMPTOMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Vocabulary from an externally provided symptom list.
    /// Entries are lowercased; empty entries are dropped.
    pub fn from_list(symptoms: impl IntoIterator<Item = String>) -> Self {
        Self {
            symptoms: symptoms
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symptoms.iter().any(|s| s == name)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Condition rule table
// ---------------------------------------------------------------------------

/// One row of the rule table: the sentence appended to the reply and the
/// condition candidates the symptom contributes.
#[derive(Debug)]
pub struct SymptomRule {
    pub symptom: &'static str,
    pub info: &'static str,
    pub conditions: &'static [(&'static str, f64)],
}

/// Static symptom → conditions mapping. Declarative on purpose: extending
/// coverage means adding a row, not another branch.
pub const SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        symptom: "headache",
        info: "Headaches can be caused by various factors including stress, dehydration, or tension. ",
        conditions: &[
            ("Tension headache", 0.85),
            ("Migraine", 0.65),
            ("Dehydration", 0.55),
        ],
    },
    SymptomRule {
        symptom: "fever",
        info: "Fever is often a sign that your body is fighting an infection. ",
        conditions: &[("Common cold", 0.75), ("Influenza", 0.70)],
    },
    SymptomRule {
        symptom: "cough",
        info: "A cough can be caused by an infection, allergies, or irritants in the air. ",
        conditions: &[("Bronchitis", 0.60), ("Common cold", 0.80)],
    },
    SymptomRule {
        symptom: "fatigue",
        info: "Fatigue can result from many conditions, as well as from poor sleep or stress. ",
        conditions: &[("Anemia", 0.45), ("Depression", 0.40)],
    },
];

/// Look up the rule for a symptom, if it has one.
pub fn rule_for(symptom: &str) -> Option<&'static SymptomRule> {
    SYMPTOM_RULES.iter().find(|rule| rule.symptom == symptom)
}
