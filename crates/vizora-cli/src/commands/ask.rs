//! Ask command - answer a free-text question about a file.

use std::path::PathBuf;

use colored::Colorize;
use vizora::{Intent, Responder, Vizora};

pub fn run(file: PathBuf, question: String, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let vizora = Vizora::new();
    let (dataset, source) = vizora.load(&file)?;
    let analysis = vizora.analyze(&dataset)?;

    if verbose {
        println!(
            "{} {:?}",
            "Intent:".cyan().bold(),
            Intent::detect(&question)
        );
    }

    let answer = Responder::new(&dataset, &analysis)
        .with_name(&source.file)
        .answer(&question);
    print!("{}", answer);

    Ok(())
}
