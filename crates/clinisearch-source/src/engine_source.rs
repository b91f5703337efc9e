//! Local fallback source: the relevance engine over an index snapshot

use crate::error::Result;
use crate::source::{SearchHit, SearchRequest, SearchSource};
use clinisearch_core::{SearchEngine, SharedIndex};
use std::sync::Arc;

/// Final stage of a fallback chain. Never delegates further.
pub struct EngineSource {
    engine: SearchEngine,
    index: Arc<SharedIndex>,
}

impl EngineSource {
    pub fn new(engine: SearchEngine, index: Arc<SharedIndex>) -> Self {
        Self { engine, index }
    }
}

impl SearchSource for EngineSource {
    fn name(&self) -> &str {
        "local-engine"
    }

    fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let snapshot = self.index.snapshot();
        let ranked = self
            .engine
            .search(&request.query, &request.filters, &snapshot)?;

        let limit = request.limit.unwrap_or(usize::MAX);
        Ok(ranked.iter().take(limit).map(SearchHit::from).collect())
    }
}
