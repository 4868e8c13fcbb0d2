//! Analyze command - statistics, insights and chart recommendations for a file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;
use vizora::{EngineConfig, FileAnalysis, Report, Severity, Vizora, VizoraConfig};

pub fn run(
    file: PathBuf,
    json: bool,
    max_insights: usize,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    debug!(file = %file.display(), max_insights, "running analyze command");

    let config = VizoraConfig {
        engine: EngineConfig::default().with_max_insights(max_insights),
        ..VizoraConfig::default()
    };
    let result = Vizora::with_config(config).analyze_file(&file)?;

    if let Some(path) = output {
        let content = if json {
            serde_json::to_string_pretty(&result)?
        } else {
            Report::new(&result.analysis)
                .with_title(&result.source.file)
                .render()
        };
        fs::write(&path, content)?;
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_human(&result, verbose);
    Ok(())
}

fn print_human(result: &FileAnalysis, verbose: bool) {
    let analysis = &result.analysis;

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        result.source.file.white()
    );
    println!(
        "{} rows, {} columns ({} numeric), {:.0}% complete",
        analysis.total_rows.to_string().white().bold(),
        analysis.total_columns,
        analysis.numeric_column_count,
        analysis.completeness
    );

    if verbose && !analysis.columns.is_empty() {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for c in &analysis.columns {
            let s = &c.statistics;
            println!(
                "  {:20} min {:<10} max {:<10} mean {:<10.2} sd {:<10.2} {:10} {}",
                c.name,
                s.min,
                s.max,
                s.mean,
                s.standard_deviation,
                c.trend.direction.label(),
                c.pattern.label()
            );
        }
    }

    println!();
    if analysis.insights.is_empty() {
        println!("{}", "No notable findings.".green());
    } else {
        println!("{}", "Insights:".yellow().bold());
        for insight in &analysis.insights {
            let tag = format!("[{}]", insight.severity.label());
            let tag = match insight.severity {
                Severity::High => tag.red().bold(),
                Severity::Medium => tag.yellow(),
                Severity::Low => tag.blue(),
            };
            println!("  {} {}", tag, insight.message);
        }
    }

    if !analysis.recommendations.is_empty() {
        println!();
        println!(
            "{} {}",
            "Recommended charts:".yellow().bold(),
            analysis.recommendation_labels().join(", ")
        );
    }
}
