//! Search source trait and the owned result shape shared by all sources

use crate::error::Result;
use clinisearch_core::{FilterConfig, Query, ScoredRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: Query,
    pub filters: FilterConfig,
    /// Applied after ranking
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: FilterConfig) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One ranked result, in the gateway's response shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub document_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub chunk_text: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl From<&ScoredRecord<'_>> for SearchHit {
    fn from(scored: &ScoredRecord<'_>) -> Self {
        let record = scored.record;
        Self {
            document_id: record.id.clone(),
            filename: record.title.clone(),
            chunk_text: record.body.clone(),
            score: scored.score,
            metadata: record
                .metadata
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        }
    }
}

/// Anything that can answer a search request
pub trait SearchSource: Send + Sync {
    /// Source name (used in logs and errors)
    fn name(&self) -> &str;

    fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>>;
}
