//! Relevance search and filter engine for clinical record snapshots

mod config;
mod engine;
mod error;
mod filter;
mod index;
mod intent;
mod ranker;
mod scorer;
mod tokenizer;
mod types;

pub use config::{
    EngineConfig, ScoringWeights, DEFAULT_DOMAIN_TERMS, DEFAULT_SUGGESTIONS, MAX_DATE_WINDOW_DAYS,
};
pub use engine::{search, SearchEngine};
pub use error::{Error, Result};
pub use filter::{FilterConfig, FilterPipeline};
pub use index::{DocumentIndex, SharedIndex};
pub use intent::QuestionIntent;
pub use ranker::rank;
pub use scorer::{searchable_text, Scorer};
pub use tokenizer::tokenize;
pub use types::{Query, Record, ScoredRecord};
