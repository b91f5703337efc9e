//! Configuration for relevance scoring and filtering

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Clinical terms that earn an extra boost when present in both query and record
pub const DEFAULT_DOMAIN_TERMS: &[&str] = &[
    "diabetes",
    "hypertension",
    "beta-blocker",
    "metformin",
    "asthma",
    "cardiology",
];

/// Upper bound on the trailing date window (about a century)
pub const MAX_DATE_WINDOW_DAYS: i64 = 36_500;

/// Example queries offered to users who have not typed anything yet
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Patients with diabetes",
    "Hypertension treatment with beta-blockers",
    "Recent lab results",
    "Cardiology consultations",
    "Patients on Metformin",
    "Asthma management plans",
];

/// Additive weights used by the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Added once per query token found in the searchable text
    pub token_match: f64,
    /// Added when the whole query appears verbatim
    pub exact_phrase: f64,
    /// Added per domain term present in both query and record
    pub domain_term: f64,
}

impl ScoringWeights {
    pub fn new() -> Self {
        Self {
            token_match: 0.3,
            exact_phrase: 0.4,
            domain_term: 0.2,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: ScoringWeights,

    /// Base inclusion threshold (score must be strictly greater)
    pub min_score: f64,

    /// Threshold for the high-confidence filter (strictly greater)
    pub high_confidence_threshold: f64,

    /// Trailing window for the date-range filter
    pub date_window_days: i64,

    /// Metadata key inspected by the category filter
    pub category_key: String,

    /// Accepted category values when the query names none
    pub accepted_categories: Vec<String>,

    /// Domain-boost vocabulary
    pub domain_terms: Vec<String>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::new(),
            min_score: 0.3,
            high_confidence_threshold: 0.8,
            date_window_days: 30,
            category_key: "format".to_string(),
            accepted_categories: vec!["pdf".to_string()],
            domain_terms: DEFAULT_DOMAIN_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("token_match", self.weights.token_match),
            ("exact_phrase", self.weights.exact_phrase),
            ("domain_term", self.weights.domain_term),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "weight {} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        for (name, threshold) in [
            ("min_score", self.min_score),
            ("high_confidence_threshold", self.high_confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(Error::InvalidConfig(format!(
                    "{} must lie in [0, 1], got {}",
                    name, threshold
                )));
            }
        }

        if !(0..=MAX_DATE_WINDOW_DAYS).contains(&self.date_window_days) {
            return Err(Error::InvalidConfig(format!(
                "date_window_days must lie in [0, {}], got {}",
                MAX_DATE_WINDOW_DAYS, self.date_window_days
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
