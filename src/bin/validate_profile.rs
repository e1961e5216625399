use bizregistry::registry::{repository_root, RegistryConfig};
use bizregistry::validation::{ProfileValidator, EXIT_INPUT_ERROR};
use bizregistry::RegistryResult;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Validate a business profile JSON file against the registry schema.
///
/// Exits 0 when valid, 1 when the document violates the schema, and 2 when
/// the document or schema cannot be loaded.
#[derive(Parser, Debug)]
#[command(name = "validate_profile", version)]
struct Cli {
    /// Profile document to check.
    profile: PathBuf,
    /// Repository root used to locate the schema.
    #[arg(long)]
    root: Option<PathBuf>,
    /// Explicit schema path, overriding the configured one.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() -> ExitCode {
    bizregistry::logging::init("warn");
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_INPUT_ERROR as u8)
        }
    }
}

fn run(cli: &Cli) -> RegistryResult<i32> {
    let schema_path = match &cli.schema {
        Some(path) => path.clone(),
        None => RegistryConfig::load(repository_root(cli.root.as_deref())?)?.schema_path,
    };
    let validator = ProfileValidator::load(&schema_path)?;
    let outcome = validator.validate_file(&cli.profile)?;
    println!("{}", outcome.report(&cli.profile.display().to_string()));
    Ok(outcome.exit_code())
}
