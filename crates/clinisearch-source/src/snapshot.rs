//! Source backed by a captured API gateway response

use crate::error::{Result, SourceError};
use crate::source::{SearchHit, SearchRequest, SearchSource};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    /// Query the gateway answered
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Serves the `results` array of a gateway search response stored on disk.
/// The response is only replayed for the query it recorded (compared trimmed
/// and case-insensitively). The gateway already ranked and filtered the hits;
/// only `limit` is applied here.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    name: String,
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: "gateway".to_string(),
            path: path.into(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl SearchSource for SnapshotSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| SourceError::Unavailable {
                source_name: self.name.clone(),
                reason: format!("{}: {}", self.path.display(), e),
            })?;
        let response: GatewayResponse =
            serde_json::from_str(&contents).map_err(|e| SourceError::Malformed {
                source_name: self.name.clone(),
                reason: e.to_string(),
            })?;

        let requested = request.query.normalized_text();
        let recorded = response.query.as_deref().map(|q| q.trim().to_lowercase());
        if recorded.as_deref() != Some(requested.as_str()) {
            return Err(SourceError::QueryMismatch {
                source_name: self.name.clone(),
                recorded: response.query,
                requested: request.query.text.clone(),
            });
        }

        let mut hits = response.results;
        if let Some(limit) = request.limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinisearch_core::Query;

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = SnapshotSource::new(dir.path().join("absent.json"));
        let result = source.search(&SearchRequest::new(Query::new("asthma")));
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.json");
        std::fs::write(&path, "<html>502 Bad Gateway</html>").unwrap();
        let result = SnapshotSource::new(&path).search(&SearchRequest::new(Query::new("x")));
        assert!(matches!(result, Err(SourceError::Malformed { .. })));
    }

    #[test]
    fn test_reads_results_and_applies_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.json");
        std::fs::write(
            &path,
            r#"{"query":"Asthma","results":[
                {"document_id":"a","score":0.9},
                {"document_id":"b","score":0.8},
                {"document_id":"c","score":0.7}
            ],"total":3}"#,
        )
        .unwrap();

        let source = SnapshotSource::new(&path).named("remote");
        assert_eq!(source.name(), "remote");

        let hits = source
            .search(&SearchRequest::new(Query::new(" asthma ")).with_limit(2))
            .unwrap();
        let ids: Vec<_> = hits.iter().map(|h| h.document_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_other_query_is_not_replayed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.json");
        std::fs::write(&path, r#"{"query":"asthma","results":[{"document_id":"a","score":0.9}]}"#)
            .unwrap();

        let result = SnapshotSource::new(&path).search(&SearchRequest::new(Query::new("diabetes")));
        assert!(matches!(result, Err(SourceError::QueryMismatch { .. })));
    }

    #[test]
    fn test_snapshot_without_query_is_not_replayed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.json");
        std::fs::write(&path, r#"{"results":[{"document_id":"a","score":0.9}]}"#).unwrap();

        let result = SnapshotSource::new(&path).search(&SearchRequest::new(Query::new("asthma")));
        assert!(matches!(
            result,
            Err(SourceError::QueryMismatch { recorded: None, .. })
        ));
    }
}
