//! Post-scoring filter pipeline
//!
//! Stages run in a fixed order and only ever narrow the working set:
//! score threshold, date window, category, high confidence.

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::types::{Query, ScoredRecord};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Toggles for the optional pipeline stages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    pub date_range: bool,
    pub category_only: bool,
    pub high_confidence: bool,
}

impl FilterConfig {
    /// Parse a JSON object such as `{"dateRange": true}`. Unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidFilterConfig(e.to_string()))
    }

    /// Enable filters by name. Accepts camelCase, snake_case and kebab-case spellings.
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for key in keys {
            let raw = key.as_ref();
            let normalized: String = raw
                .chars()
                .filter(|c| *c != '_' && *c != '-')
                .flat_map(char::to_lowercase)
                .collect();
            match normalized.as_str() {
                "daterange" => config.date_range = true,
                "categoryonly" => config.category_only = true,
                "highconfidence" => config.high_confidence = true,
                _ => {
                    return Err(Error::InvalidFilterConfig(format!(
                        "unrecognized filter key: {}",
                        raw
                    )))
                }
            }
        }
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct FilterPipeline {
    min_score: f64,
    high_confidence_threshold: f64,
    /// `None` when the configured window is not representable
    date_window: Option<Duration>,
    category_key: String,
    accepted_categories: BTreeSet<String>,
}

impl FilterPipeline {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            min_score: config.min_score,
            high_confidence_threshold: config.high_confidence_threshold,
            date_window: Duration::try_days(config.date_window_days),
            category_key: config.category_key.clone(),
            accepted_categories: config
                .accepted_categories
                .iter()
                .map(|c| c.to_lowercase())
                .collect(),
        }
    }

    /// Resolve the inclusion threshold for a query
    pub fn min_score_for(&self, query: &Query) -> Result<f64> {
        query.validate()?;
        Ok(query.min_score.unwrap_or(self.min_score))
    }

    /// Run the enabled stages over `scored`. Relative order is preserved.
    pub fn apply<'a>(
        &self,
        mut scored: Vec<ScoredRecord<'a>>,
        query: &Query,
        filters: &FilterConfig,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredRecord<'a>>> {
        let min_score = self.min_score_for(query)?;

        scored.retain(|s| s.score > min_score);
        tracing::debug!(remaining = scored.len(), min_score, "score threshold");

        if filters.date_range || query.date_after.is_some() {
            // A window reaching past the representable range keeps everything
            let window_start = filters
                .date_range
                .then(|| self.date_window.and_then(|window| now.checked_sub_signed(window)))
                .flatten();
            scored.retain(|s| {
                let ts = s.record.timestamp;
                window_start.map_or(true, |start| ts >= start)
                    && query.date_after.map_or(true, |after| ts >= after)
            });
            tracing::debug!(remaining = scored.len(), "date filter");
        }

        if filters.category_only || query.categories.is_some() {
            let requested: Option<BTreeSet<String>> = query
                .categories
                .as_ref()
                .map(|cats| cats.iter().map(|c| c.to_lowercase()).collect());
            let accepted = requested.as_ref().unwrap_or(&self.accepted_categories);
            scored.retain(|s| {
                s.record
                    .metadata
                    .get(&self.category_key)
                    .is_some_and(|value| accepted.contains(&value.to_lowercase()))
            });
            tracing::debug!(remaining = scored.len(), "category filter");
        }

        if filters.high_confidence {
            scored.retain(|s| s.score > self.high_confidence_threshold);
            tracing::debug!(remaining = scored.len(), "confidence filter");
        }

        Ok(scored)
    }
}
