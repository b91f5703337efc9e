mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => commands::search::run(&args),
        Commands::Audit(args) => commands::audit::run(&args),
        Commands::Ask(args) => commands::ask::run(&args),
        Commands::Index { file } => commands::index::run(&file),
        Commands::Config { config } => commands::config::run(config.as_deref()),
        Commands::Suggest => commands::suggest::run(),
        Commands::Version => commands::version::run(),
    }
}
