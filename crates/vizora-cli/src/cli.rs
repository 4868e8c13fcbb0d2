//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vizora: statistical insights for tabular data
#[derive(Parser)]
#[command(name = "vizora")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data file and report statistics, insights and chart ideas
    Analyze {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of insights to report
        #[arg(short, long, default_value = "10")]
        max_insights: usize,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask a question about a data file
    Ask {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Question, e.g. "what trends do you see?"
        #[arg(value_name = "QUESTION")]
        question: String,
    },

    /// Build a chart series from two columns
    Chart {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column used for point labels
        #[arg(short, long)]
        x: String,

        /// Column used for point values
        #[arg(short, long)]
        y: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
