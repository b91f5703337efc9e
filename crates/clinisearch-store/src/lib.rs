//! Local snapshot files: record sets, audit logs, and their locations

mod audit;
mod error;
mod io;
mod paths;

pub use audit::{filter_logs, record_event, AuditFilter, AuditLog, ALL_ACTIONS};
pub use error::{Result, StoreError};
pub use io::{append_jsonl, atomic_write, load_records, read_jsonl, save_records};
pub use paths::{Paths, HOME_ENV};
