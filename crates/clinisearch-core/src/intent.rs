//! Question intent classification for the Q&A fallback

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionIntent {
    Medication,
    LabResults,
    Diagnosis,
    Visit,
    Allergy,
    General,
}

struct IntentKeywords {
    intent: QuestionIntent,
    keywords: &'static [&'static str],
}

// Checked in order; the first intent with any hit wins.
const INTENT_KEYWORD_MAP: &[IntentKeywords] = &[
    IntentKeywords {
        intent: QuestionIntent::Medication,
        keywords: &["medication", "medicine", "drug", "taking"],
    },
    IntentKeywords {
        intent: QuestionIntent::LabResults,
        keywords: &["lab", "test", "result", "blood"],
    },
    IntentKeywords {
        intent: QuestionIntent::Diagnosis,
        keywords: &["diagnos", "condition", "disease"],
    },
    IntentKeywords {
        intent: QuestionIntent::Visit,
        keywords: &["visit", "appointment", "last seen"],
    },
    IntentKeywords {
        intent: QuestionIntent::Allergy,
        keywords: &["allerg"],
    },
];

impl QuestionIntent {
    pub fn classify(question: &str) -> Self {
        let question = question.to_lowercase();
        INTENT_KEYWORD_MAP
            .iter()
            .find(|entry| entry.keywords.iter().any(|kw| question.contains(*kw)))
            .map(|entry| entry.intent)
            .unwrap_or(QuestionIntent::General)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionIntent::Medication => "current medications",
            QuestionIntent::LabResults => "recent lab results",
            QuestionIntent::Diagnosis => "diagnoses and conditions",
            QuestionIntent::Visit => "recent visits",
            QuestionIntent::Allergy => "documented allergies",
            QuestionIntent::General => "medical record overview",
        }
    }
}
