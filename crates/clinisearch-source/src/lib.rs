//! Primary/fallback data sources for search requests

mod engine_source;
mod error;
mod fallback;
mod snapshot;
mod source;

pub use engine_source::EngineSource;
pub use error::{Result, SourceError};
pub use fallback::{try_primary_then_fallback, FallbackChain, FallbackReason, Origin, Served};
pub use snapshot::SnapshotSource;
pub use source::{SearchHit, SearchRequest, SearchSource};
