//! Query pipeline: tokenize, score, filter, rank

use crate::config::EngineConfig;
use crate::error::Result;
use crate::filter::{FilterConfig, FilterPipeline};
use crate::index::DocumentIndex;
use crate::ranker::rank;
use crate::scorer::Scorer;
use crate::tokenizer::tokenize;
use crate::types::{Query, ScoredRecord};
use chrono::{DateTime, Utc};

/// Stateless search engine. Holds only configuration, so one engine can
/// serve any number of concurrent queries against shared snapshots.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    scorer: Scorer,
    pipeline: FilterPipeline,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let scorer = Scorer::from_config(&config);
        let pipeline = FilterPipeline::from_config(&config);
        Ok(Self {
            config,
            scorer,
            pipeline,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn search<'a>(
        &self,
        query: &Query,
        filters: &FilterConfig,
        index: &'a DocumentIndex,
    ) -> Result<Vec<ScoredRecord<'a>>> {
        self.search_at(query, filters, index, Utc::now())
    }

    /// Run a query with an explicit "now" for the date window
    pub fn search_at<'a>(
        &self,
        query: &Query,
        filters: &FilterConfig,
        index: &'a DocumentIndex,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredRecord<'a>>> {
        // Malformed thresholds fail even when nothing would be scored
        self.pipeline.min_score_for(query)?;

        if query.is_blank() || index.is_empty() {
            tracing::debug!(
                blank = query.is_blank(),
                indexed = index.len(),
                "nothing to search"
            );
            return Ok(Vec::new());
        }

        let raw = query.normalized_text();
        let tokens = tokenize(&raw);

        let scored: Vec<ScoredRecord<'a>> = index
            .entries()
            .map(|(position, record, searchable)| ScoredRecord {
                record,
                score: self.scorer.score_text(searchable, &tokens, &raw),
                position,
            })
            .collect();
        let candidates = scored.len();

        let filtered = self.pipeline.apply(scored, query, filters, now)?;
        let ranked = rank(filtered);

        tracing::debug!(
            query = %raw,
            tokens = tokens.len(),
            candidates,
            results = ranked.len(),
            "search complete"
        );
        Ok(ranked)
    }
}

/// Search with the default configuration
pub fn search<'a>(
    query_text: &str,
    filters: &FilterConfig,
    index: &'a DocumentIndex,
) -> Result<Vec<ScoredRecord<'a>>> {
    SearchEngine::new(EngineConfig::new())?.search(&Query::new(query_text), filters, index)
}
