//! Example: Analyze a tabular data file with Vizora.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path> [question]
//!
//! Example:
//!   cargo run --example analyze -- sales.csv "what trends do you see?"

use std::env;
use std::path::Path;

use vizora::{Report, Responder, Vizora};

fn main() -> vizora::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path> [question]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- sales.csv \"what trends do you see?\"");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let vizora = Vizora::new();
    let (dataset, source) = vizora.load(path)?;
    let analysis = vizora.analyze(&dataset)?;

    println!("## Source Metadata");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Hash: {}", source.hash);
    println!();

    print!("{}", Report::new(&analysis).with_title(&source.file).render());

    if let Some(question) = args.get(2) {
        println!();
        println!("## Q: {}", question);
        print!(
            "{}",
            Responder::new(&dataset, &analysis)
                .with_name(&source.file)
                .answer(question)
        );
    }

    Ok(())
}
