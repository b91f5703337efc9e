pub mod ask;
pub mod audit;
pub mod config;
pub mod index;
pub mod search;
pub mod suggest;
pub mod version;

use anyhow::Context;
use clinisearch_core::{DocumentIndex, EngineConfig, SearchEngine};
use clinisearch_store::{load_records, Paths};
use std::path::Path;

/// Engine built from `explicit`, else the home config, else defaults
pub(crate) fn load_config(explicit: Option<&Path>, paths: &Paths) -> anyhow::Result<EngineConfig> {
    match explicit {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::load_or_default(&paths.config_file())?),
    }
}

pub(crate) fn load_engine(explicit: Option<&Path>, paths: &Paths) -> anyhow::Result<SearchEngine> {
    Ok(SearchEngine::new(load_config(explicit, paths)?)?)
}

/// A missing default snapshot is an empty index; a missing explicit one is an error
pub(crate) fn load_index(explicit: Option<&Path>, paths: &Paths) -> anyhow::Result<DocumentIndex> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = paths.records_file();
            if !path.exists() {
                tracing::warn!(
                    path = %path.display(),
                    "no record snapshot, searching an empty index"
                );
                return Ok(DocumentIndex::empty());
            }
            path
        }
    };

    let records = load_records(&path)
        .with_context(|| format!("failed to load records {}", path.display()))?;
    let index = DocumentIndex::new(records)?;
    tracing::info!(records = index.len(), path = %path.display(), "loaded record snapshot");
    Ok(index)
}
