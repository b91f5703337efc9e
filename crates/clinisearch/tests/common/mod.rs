#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use clinisearch_core::{DocumentIndex, EngineConfig, Record, SearchEngine};

/// Default weights and thresholds with the domain vocabulary cleared
pub fn plain_config() -> EngineConfig {
    EngineConfig {
        domain_terms: vec![],
        ..EngineConfig::default()
    }
}

pub fn plain_engine() -> SearchEngine {
    SearchEngine::new(plain_config()).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(
            "DOC-001",
            "Endocrinology note",
            "Type 2 Diabetes Mellitus, Metformin 500mg BID",
            days_ago(3),
        )
        .with_metadata("format", "pdf")
        .with_metadata("patient_id", "PAT001"),
        Record::new(
            "DOC-002",
            "Cardiology consult",
            "Hypertension managed with a beta-blocker",
            days_ago(45),
        )
        .with_metadata("format", "docx")
        .with_metadata("patient_id", "PAT002"),
        Record::new(
            "DOC-003",
            "Pulmonology visit",
            "Asthma exacerbation, inhaler technique reviewed",
            days_ago(10),
        )
        .with_metadata("format", "pdf")
        .with_metadata("patient_id", "PAT003"),
        Record::new(
            "DOC-004",
            "Lab results",
            "Lipid panel and HbA1c for diabetes follow-up",
            days_ago(1),
        )
        .with_metadata("format", "pdf")
        .with_metadata("patient_id", "PAT001"),
    ]
}

pub fn sample_index() -> DocumentIndex {
    DocumentIndex::new(sample_records()).unwrap()
}
