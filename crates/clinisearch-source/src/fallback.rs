//! Explicit primary-then-fallback composition

use crate::error::Result;
use crate::source::{SearchHit, SearchRequest, SearchSource};
use serde::Serialize;

/// Which stage produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Primary,
    Fallback,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Primary => "primary",
            Origin::Fallback => "fallback",
        }
    }
}

/// Why the fallback ran
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The primary returned an error
    PrimaryFailed { error: String },
    /// The primary succeeded but its value was not usable (e.g. empty)
    PrimaryRejected,
    /// Nothing to search; neither source was consulted
    BlankQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Served<T> {
    pub value: T,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FallbackReason>,
}

/// Run `primary`; run `fallback` instead when the primary errors or
/// `needs_fallback` rejects its value. A fallback error is returned as-is.
pub fn try_primary_then_fallback<T, P, F, N>(
    primary: P,
    fallback: F,
    needs_fallback: N,
) -> Result<Served<T>>
where
    P: FnOnce() -> Result<T>,
    F: FnOnce() -> Result<T>,
    N: FnOnce(&T) -> bool,
{
    let reason = match primary() {
        Ok(value) if !needs_fallback(&value) => {
            return Ok(Served {
                value,
                origin: Origin::Primary,
                reason: None,
            })
        }
        Ok(_) => FallbackReason::PrimaryRejected,
        Err(e) => FallbackReason::PrimaryFailed {
            error: e.to_string(),
        },
    };

    let value = fallback()?;
    Ok(Served {
        value,
        origin: Origin::Fallback,
        reason: Some(reason),
    })
}

/// Two search sources composed with [`try_primary_then_fallback`]
pub struct FallbackChain {
    primary: Box<dyn SearchSource>,
    fallback: Box<dyn SearchSource>,
    fallback_on_empty: bool,
}

impl FallbackChain {
    pub fn new(primary: Box<dyn SearchSource>, fallback: Box<dyn SearchSource>) -> Self {
        Self {
            primary,
            fallback,
            fallback_on_empty: true,
        }
    }

    /// Whether an empty primary result triggers the fallback (default: true)
    pub fn fallback_on_empty(mut self, enabled: bool) -> Self {
        self.fallback_on_empty = enabled;
        self
    }

    /// Validate the request, then search the primary and fall back as needed.
    /// A blank query yields no hits without consulting either source.
    pub fn search(&self, request: &SearchRequest) -> Result<Served<Vec<SearchHit>>> {
        request.query.validate()?;
        if request.query.is_blank() {
            tracing::debug!(primary = self.primary.name(), "blank query, nothing to search");
            return Ok(Served {
                value: Vec::new(),
                origin: Origin::Fallback,
                reason: Some(FallbackReason::BlankQuery),
            });
        }

        let served = try_primary_then_fallback(
            || self.primary.search(request),
            || self.fallback.search(request),
            |hits| self.fallback_on_empty && hits.is_empty(),
        )?;

        match &served.reason {
            Some(FallbackReason::PrimaryFailed { error }) => tracing::warn!(
                primary = self.primary.name(),
                fallback = self.fallback.name(),
                %error,
                "primary source failed, served fallback"
            ),
            Some(FallbackReason::PrimaryRejected) => tracing::warn!(
                primary = self.primary.name(),
                fallback = self.fallback.name(),
                "primary source returned no results, served fallback"
            ),
            Some(FallbackReason::BlankQuery) | None => {
                tracing::debug!(primary = self.primary.name(), "served primary")
            }
        }

        Ok(served)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use clinisearch_core::Query;
    use std::collections::BTreeMap;

    struct FixedSource {
        name: &'static str,
        hits: std::result::Result<Vec<SearchHit>, &'static str>,
    }

    impl SearchSource for FixedSource {
        fn name(&self) -> &str {
            self.name
        }

        fn search(&self, _request: &SearchRequest) -> Result<Vec<SearchHit>> {
            self.hits
                .clone()
                .map_err(|reason| SourceError::Unavailable {
                    source_name: self.name.to_string(),
                    reason: reason.to_string(),
                })
        }
    }

    fn hit(id: &str) -> SearchHit {
        SearchHit {
            document_id: id.to_string(),
            filename: String::new(),
            chunk_text: String::new(),
            score: 0.9,
            metadata: BTreeMap::new(),
        }
    }

    fn chain(primary: std::result::Result<Vec<SearchHit>, &'static str>) -> FallbackChain {
        FallbackChain::new(
            Box::new(FixedSource {
                name: "gateway",
                hits: primary,
            }),
            Box::new(FixedSource {
                name: "local",
                hits: Ok(vec![hit("local-1")]),
            }),
        )
    }

    #[test]
    fn test_primary_success_is_served() {
        let served = try_primary_then_fallback(|| Ok(1), || Ok(2), |_| false).unwrap();
        assert_eq!(served.value, 1);
        assert_eq!(served.origin, Origin::Primary);
        assert!(served.reason.is_none());
    }

    #[test]
    fn test_fallback_not_called_when_primary_accepted() {
        let mut called = false;
        let served = try_primary_then_fallback(
            || Ok("primary"),
            || {
                called = true;
                Ok("fallback")
            },
            |_| false,
        )
        .unwrap();
        assert_eq!(served.value, "primary");
        assert!(!called);
    }

    #[test]
    fn test_primary_error_records_reason() {
        let served = try_primary_then_fallback(
            || {
                Err(SourceError::Unavailable {
                    source_name: "gateway".to_string(),
                    reason: "connection refused".to_string(),
                })
            },
            || Ok(2),
            |_| false,
        )
        .unwrap();
        assert_eq!(served.value, 2);
        assert_eq!(served.origin, Origin::Fallback);
        match served.reason {
            Some(FallbackReason::PrimaryFailed { error }) => {
                assert!(error.contains("connection refused"))
            }
            other => panic!("unexpected reason: {:?}", other),
        }
    }

    #[test]
    fn test_fallback_error_surfaces() {
        let result: Result<Served<i32>> = try_primary_then_fallback(
            || Ok(0),
            || {
                Err(SourceError::Malformed {
                    source_name: "local".to_string(),
                    reason: "bad".to_string(),
                })
            },
            |v| *v == 0,
        );
        assert!(matches!(result, Err(SourceError::Malformed { .. })));
    }

    #[test]
    fn test_chain_falls_back_on_error_and_empty() {
        let request = SearchRequest::new(Query::new("asthma"));

        let served = chain(Err("down")).search(&request).unwrap();
        assert_eq!(served.origin, Origin::Fallback);
        assert_eq!(served.value[0].document_id, "local-1");

        let served = chain(Ok(vec![])).search(&request).unwrap();
        assert_eq!(served.origin, Origin::Fallback);
        assert_eq!(served.reason, Some(FallbackReason::PrimaryRejected));

        let served = chain(Ok(vec![hit("remote-1")])).search(&request).unwrap();
        assert_eq!(served.origin, Origin::Primary);
        assert_eq!(served.value[0].document_id, "remote-1");
    }

    #[test]
    fn test_chain_blank_query_consults_no_source() {
        let request = SearchRequest::new(Query::new("   "));
        let served = chain(Ok(vec![hit("remote-1")])).search(&request).unwrap();
        assert!(served.value.is_empty());
        assert_eq!(served.reason, Some(FallbackReason::BlankQuery));
    }

    #[test]
    fn test_chain_rejects_invalid_min_score_before_primary() {
        let request = SearchRequest::new(Query::new("asthma").with_min_score(1.5));
        let result = chain(Ok(vec![hit("remote-1")])).search(&request);
        assert!(matches!(
            result,
            Err(SourceError::Engine(clinisearch_core::Error::InvalidFilterConfig(_)))
        ));
    }

    #[test]
    fn test_chain_can_accept_empty_primary() {
        let request = SearchRequest::new(Query::new("asthma"));
        let served = chain(Ok(vec![]))
            .fallback_on_empty(false)
            .search(&request)
            .unwrap();
        assert_eq!(served.origin, Origin::Primary);
        assert!(served.value.is_empty());
    }

    #[test]
    fn test_served_serializes_origin() {
        let served = Served {
            value: vec![1],
            origin: Origin::Fallback,
            reason: Some(FallbackReason::PrimaryRejected),
        };
        let json = serde_json::to_value(&served).unwrap();
        assert_eq!(json["origin"], "fallback");
        assert_eq!(served.origin.as_str(), "fallback");
        assert_eq!(json["reason"]["kind"], "primary_rejected");
    }
}
