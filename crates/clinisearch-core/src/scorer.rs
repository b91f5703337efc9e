//! Additive keyword-overlap scorer

use crate::config::{EngineConfig, ScoringWeights};
use crate::types::Record;

/// Flatten a record into the lowercased text used for substring matching
pub fn searchable_text(record: &Record) -> String {
    let mut text = String::with_capacity(record.title.len() + record.body.len() + 1);
    text.push_str(&record.title);
    text.push(' ');
    text.push_str(&record.body);
    for value in record.metadata.values() {
        text.push(' ');
        text.push_str(value);
    }
    text.to_lowercase()
}

#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    domain_terms: Vec<String>,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, domain_terms: &[String]) -> Self {
        Self {
            weights,
            domain_terms: domain_terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.weights.clone(), &config.domain_terms)
    }

    /// Score a record against already tokenized and lowercased query parts
    pub fn score(&self, record: &Record, query_tokens: &[String], raw_query: &str) -> f64 {
        self.score_text(&searchable_text(record), query_tokens, raw_query)
    }

    /// Score precomputed searchable text. Result is clamped to [0, 1].
    pub fn score_text(&self, searchable: &str, query_tokens: &[String], raw_query: &str) -> f64 {
        let mut score = 0.0;

        for token in query_tokens {
            if searchable.contains(token.as_str()) {
                score += self.weights.token_match;
            }
        }

        if !raw_query.is_empty() && searchable.contains(raw_query) {
            score += self.weights.exact_phrase;
        }

        for term in &self.domain_terms {
            if raw_query.contains(term.as_str()) && searchable.contains(term.as_str()) {
                score += self.weights.domain_term;
            }
        }

        f64::clamp(score, 0.0, 1.0)
    }
}
