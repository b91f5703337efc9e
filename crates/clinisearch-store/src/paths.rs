//! Path resolution for local snapshot files

use crate::error::{Result, StoreError};
use std::path::PathBuf;

/// Overrides the base directory when set
pub const HOME_ENV: &str = "CLINISEARCH_HOME";

#[derive(Debug, Clone)]
pub struct Paths {
    pub base: PathBuf,
}

impl Paths {
    /// Resolve from `CLINISEARCH_HOME`, else `~/.clinisearch`
    pub fn new() -> Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(dir));
        }
        let home = dirs::home_dir().ok_or(StoreError::NoHome)?;
        Ok(Self::at(home.join(".clinisearch")))
    }

    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.json")
    }

    pub fn records_file(&self) -> PathBuf {
        self.base.join("records.json")
    }

    pub fn audit_file(&self) -> PathBuf {
        self.base.join("audit.jsonl")
    }

    /// Last search response captured from the API gateway
    pub fn gateway_snapshot_file(&self) -> PathBuf {
        self.base.join("gateway_results.json")
    }
}
