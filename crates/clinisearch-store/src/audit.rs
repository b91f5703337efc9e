//! Audit-log records and client-side filtering

use crate::error::Result;
use crate::io::{append_jsonl, read_jsonl};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Action filter value that matches every event type
pub const ALL_ACTIONS: &str = "All Actions";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: u64,
    pub event_type: String,
    pub user_id: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Free text matched against event type, user, details and resource
    pub search: String,
    /// Substring of the event type, e.g. `LOGIN` for `USER_LOGIN`
    pub action: Option<String>,
    /// Prefix of the `YYYY-MM-DDTHH:MM:SS` timestamp, e.g. `2024-12`
    pub date_prefix: Option<String>,
}

impl AuditFilter {
    pub fn matches(&self, log: &AuditLog) -> bool {
        self.matches_search(log) && self.matches_action(log) && self.matches_date(log)
    }

    fn matches_search(&self, log: &AuditLog) -> bool {
        let needle = self.search.to_lowercase();
        [&log.event_type, &log.user_id, &log.details, &log.resource_id]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_action(&self, log: &AuditLog) -> bool {
        match self.action.as_deref() {
            None | Some(ALL_ACTIONS) | Some("") => true,
            Some(action) => log.event_type.contains(&action.to_uppercase()),
        }
    }

    fn matches_date(&self, log: &AuditLog) -> bool {
        match self.date_prefix.as_deref() {
            None | Some("") => true,
            Some(prefix) => log
                .timestamp
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string()
                .starts_with(prefix),
        }
    }
}

/// Append a successful event to the audit log at `path`, numbered after the
/// highest existing id.
pub fn record_event(
    path: &Path,
    event_type: &str,
    user_id: &str,
    resource_id: &str,
    details: &str,
) -> Result<AuditLog> {
    let existing: Vec<AuditLog> = read_jsonl(path)?;
    let log = AuditLog {
        id: existing.iter().map(|l| l.id).max().unwrap_or(0) + 1,
        event_type: event_type.to_string(),
        user_id: user_id.to_string(),
        resource_id: resource_id.to_string(),
        status: "success".to_string(),
        timestamp: Utc::now(),
        ip_address: String::new(),
        details: details.to_string(),
    };
    append_jsonl(path, &log)?;
    tracing::debug!(id = log.id, event_type, "recorded audit event");
    Ok(log)
}

/// Logs matching `filter`, in their original order
pub fn filter_logs<'a>(logs: &'a [AuditLog], filter: &AuditFilter) -> Vec<&'a AuditLog> {
    logs.iter().filter(|log| filter.matches(log)).collect()
}
