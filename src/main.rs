//! release-pom - generate a release POM from resolved dependencies
//!
//! Reads the resolution report written by the build, filters its
//! dependencies and prints (or writes) the resulting POM.

use clap::Parser;
use colored::Colorize;
use release_pom::cli::CliArgs;
use release_pom::config::ReleasePomConfig;
use release_pom::error::AppError;
use release_pom::host::HostReport;
use release_pom::mojo::ReleasePomMojo;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let app_error = e.downcast_ref::<AppError>();
            if let Some(AppError::Resolution(resolution)) = app_error {
                eprintln!("Unable to reliably determine dependencies");
                eprint!("{}", resolution.report());
            }
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(app_error.map(AppError::exit_code).unwrap_or(1))
        }
    }
}

/// Log to stderr; RUST_LOG takes precedence over --verbose/--quiet
fn init_logging(args: &CliArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main application logic
fn run(args: &CliArgs) -> anyhow::Result<()> {
    tracing::debug!(report = %args.report.display(), "release-pom v{}", env!("CARGO_PKG_VERSION"));

    let config = ReleasePomConfig::load(args, Path::new(".")).map_err(AppError::from)?;
    let report = HostReport::from_path(&args.report).map_err(AppError::from)?;

    ReleasePomMojo::new(config).execute(&report)?;
    Ok(())
}
