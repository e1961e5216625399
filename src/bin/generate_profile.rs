use anyhow::{Context, Result};
use bizregistry::profiles::{synthesize_profile, Submission};
use bizregistry::registry::{today, write_json_document};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Generate a business profile JSON from parsed submission data.
#[derive(Parser, Debug)]
#[command(name = "generate_profile", version)]
struct Cli {
    /// Input submission JSON file.
    #[arg(long)]
    input: PathBuf,
    /// Output profile JSON file (overwritten if present).
    #[arg(long)]
    output: PathBuf,
    /// Date stamped into the profile (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    bizregistry::logging::init("info");
    let cli = Cli::parse();

    let submission = Submission::load(&cli.input)
        .with_context(|| format!("Failed to load submission {}", cli.input.display()))?;
    let profile = synthesize_profile(&submission, cli.date.unwrap_or_else(today))
        .with_context(|| format!("Failed to synthesize profile from {}", cli.input.display()))?;
    let outcome = write_json_document(&cli.output, &profile)?;

    println!("Profile generated: {}", outcome.path.display());
    Ok(())
}
