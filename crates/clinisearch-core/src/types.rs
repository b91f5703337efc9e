//! Core types for relevance search

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A searchable unit held by the document index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            metadata: BTreeMap::new(),
            timestamp,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A record annotated with its relevance for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub score: f64,
    /// Insertion position in the index snapshot
    pub position: usize,
}

/// Query text plus the structured options that narrow it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub text: String,
    /// Overrides the configured inclusion threshold
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub date_after: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Option<BTreeSet<String>>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_date_after(mut self, date_after: DateTime<Utc>) -> Self {
        self.date_after = Some(date_after);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Trimmed, lowercased text as matched against searchable text
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// A `min_score` outside [0, 1] (or NaN) is a malformed filter configuration
    pub fn validate(&self) -> Result<()> {
        match self.min_score {
            Some(score) if !(0.0..=1.0).contains(&score) => Err(Error::InvalidFilterConfig(
                format!("minScore must lie in [0, 1], got {}", score),
            )),
            _ => Ok(()),
        }
    }
}
