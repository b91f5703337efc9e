use crate::cli::SearchArgs;
use clinisearch_core::{FilterConfig, Query, SharedIndex};
use clinisearch_source::{
    EngineSource, FallbackChain, SearchHit, SearchRequest, SearchSource, SnapshotSource,
};
use clinisearch_store::Paths;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    /// `primary`, `fallback`, or `local` when no gateway snapshot was consulted
    pub origin: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

pub fn run(args: &SearchArgs) -> anyhow::Result<()> {
    let output = execute(args, &Paths::new()?)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub(crate) fn execute(args: &SearchArgs, paths: &Paths) -> anyhow::Result<SearchOutput> {
    let request = build_request(args)?;

    let engine = super::load_engine(args.config.as_deref(), paths)?;
    let index = super::load_index(args.records.as_deref(), paths)?;
    let local = EngineSource::new(engine, Arc::new(SharedIndex::new(index)));

    let (origin, results) = match gateway_snapshot(args, paths) {
        Some(path) => {
            let chain = FallbackChain::new(Box::new(SnapshotSource::new(path)), Box::new(local));
            let served = chain.search(&request)?;
            (served.origin.as_str().to_string(), served.value)
        }
        None => ("local".to_string(), local.search(&request)?),
    };

    Ok(SearchOutput {
        origin,
        count: results.len(),
        results,
    })
}

fn build_request(args: &SearchArgs) -> anyhow::Result<SearchRequest> {
    let mut filters = FilterConfig::from_keys(&args.filters)?;
    filters.date_range |= args.date_range;
    filters.category_only |= args.category_only;
    filters.high_confidence |= args.high_confidence;

    let mut query = Query::new(args.query.as_str());
    if let Some(min_score) = args.min_score {
        query = query.with_min_score(min_score);
    }
    if !args.categories.is_empty() {
        query = query.with_categories(args.categories.iter().cloned());
    }

    let mut request = SearchRequest::new(query).with_filters(filters);
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    Ok(request)
}

/// `--primary`, else a captured gateway response in the home directory
fn gateway_snapshot(args: &SearchArgs, paths: &Paths) -> Option<PathBuf> {
    args.primary.clone().or_else(|| {
        let captured = paths.gateway_snapshot_file();
        captured.exists().then_some(captured)
    })
}
