use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clinisearch")]
#[command(version)]
#[command(about = "Relevance search over clinical record snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the record snapshot, replaying a captured gateway response for the same query first
    Search(SearchArgs),

    /// Filter audit logs
    Audit(AuditArgs),

    /// Classify a question and list supporting records
    Ask(AskArgs),

    /// Validate a record export and make it the home record snapshot
    Index {
        /// Record export (JSON array)
        file: PathBuf,
    },

    /// Print the effective engine configuration
    Config {
        /// Engine config JSON (defaults to the home directory config)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print example queries
    Suggest,

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Record snapshot (JSON array)
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Engine config JSON
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Captured gateway response to try before the local engine
    #[arg(long)]
    pub primary: Option<PathBuf>,

    /// Keep only records from the trailing date window
    #[arg(long)]
    pub date_range: bool,

    /// Keep only records in the accepted categories
    #[arg(long)]
    pub category_only: bool,

    /// Keep only high-confidence matches
    #[arg(long)]
    pub high_confidence: bool,

    /// Enable a filter by name (dateRange, categoryOnly, highConfidence)
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Accepted category values, overriding the configured ones
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Inclusion threshold override
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub struct AuditArgs {
    /// Audit log (JSONL)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Free text matched against event, user, details and resource
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Event type filter, e.g. LOGIN
    #[arg(short, long)]
    pub action: Option<String>,

    /// Timestamp prefix, e.g. 2024-12-05
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct AskArgs {
    pub question: String,

    /// Restrict sources to one patient
    #[arg(short, long)]
    pub patient: Option<String>,

    #[arg(long)]
    pub records: Option<PathBuf>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 3)]
    pub limit: usize,
}
