//! Chart command - emit a two-column series for a chart widget.

use std::path::PathBuf;

use colored::Colorize;
use vizora::{ChartSeries, Vizora};

pub fn run(
    file: PathBuf,
    x: String,
    y: String,
    json: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let vizora = Vizora::new();
    let (dataset, _) = vizora.load(&file)?;
    let series = ChartSeries::build(&dataset, &x, &y)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!(
        "{} {} by {} ({} points)",
        "Series".cyan().bold(),
        series.y_axis.white().bold(),
        series.x_axis.white(),
        series.len()
    );

    // Bars are scaled against the largest magnitude
    let peak = series
        .points
        .iter()
        .map(|p| p.value.abs())
        .fold(0.0_f64, f64::max);
    let bar_width = 30.0;

    for point in &series.points {
        let filled = if peak > 0.0 {
            (point.value.abs() / peak * bar_width).round() as usize
        } else {
            0
        };
        println!(
            "  {:16} {:>12} {}",
            point.name,
            point.value,
            "█".repeat(filled).cyan()
        );
    }

    Ok(())
}
