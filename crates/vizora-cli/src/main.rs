//! Vizora CLI - statistical insights for tabular data files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    // Priority: RUST_LOG > --verbose > warn
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let result = match cli.command {
        Commands::Analyze {
            file,
            json,
            max_insights,
            output,
        } => commands::analyze::run(file, json, max_insights, output, cli.verbose),

        Commands::Ask { file, question } => commands::ask::run(file, question, cli.verbose),

        Commands::Chart { file, x, y, json } => commands::chart::run(file, x, y, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
