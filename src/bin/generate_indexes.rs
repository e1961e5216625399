use anyhow::{Context, Result};
use bizregistry::indexing::IndexBuilder;
use bizregistry::registry::{repository_root, RegistryConfig};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Generate per-category and master index files for the registry.
#[derive(Parser, Debug)]
#[command(name = "generate_indexes", version)]
struct Cli {
    /// Repository root containing `data/` (defaults to $BIZREGISTRY_HOME or the current directory).
    #[arg(long)]
    root: Option<PathBuf>,
    /// Date stamped into `lastUpdated` (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    bizregistry::logging::init("info");
    let cli = Cli::parse();

    let root = repository_root(cli.root.as_deref())?;
    let config = RegistryConfig::load(&root)
        .with_context(|| format!("Failed to load configuration under {}", root.display()))?;
    let mut builder = IndexBuilder::new(&config);
    if let Some(date) = cli.date {
        builder = builder.generated_on(date);
    }
    let report = builder
        .run()
        .with_context(|| format!("Index generation failed for {}", config.data_root.display()))?;

    println!("{}", report.describe());
    Ok(())
}
