//! CLI argument parsing module for release-pom

use clap::Parser;
use std::path::PathBuf;

/// Default location of the host's resolution report
pub const DEFAULT_REPORT_PATH: &str = "target/resolution.json";

/// Generate a release POM from a project's resolved dependencies
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "release-pom",
    version,
    about = "Generate a release POM from a project's resolved dependencies"
)]
pub struct CliArgs {
    /// Resolution report written by the build (.json or .toml)
    #[arg(default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    // Scope filters
    /// Scopes to include (comma-separated)
    #[arg(long, env = "RELEASE_POM_INCLUDE_SCOPE")]
    pub include_scope: Option<String>,

    /// Scopes to exclude (comma-separated)
    #[arg(long, env = "RELEASE_POM_EXCLUDE_SCOPE")]
    pub exclude_scope: Option<String>,

    // Type filters
    /// Types to include (comma-separated)
    #[arg(long, env = "RELEASE_POM_INCLUDE_TYPES")]
    pub include_types: Option<String>,

    /// Types to exclude (comma-separated)
    #[arg(long, env = "RELEASE_POM_EXCLUDE_TYPES")]
    pub exclude_types: Option<String>,

    // Classifier filters
    /// Classifiers to include (comma-separated)
    #[arg(long, env = "RELEASE_POM_INCLUDE_CLASSIFIERS")]
    pub include_classifiers: Option<String>,

    /// Classifiers to exclude (comma-separated)
    #[arg(long, env = "RELEASE_POM_EXCLUDE_CLASSIFIERS")]
    pub exclude_classifiers: Option<String>,

    // Group filters
    /// Group ids to include (comma-separated)
    #[arg(long, env = "RELEASE_POM_INCLUDE_GROUP_IDS")]
    pub include_group_ids: Option<String>,

    /// Group ids to exclude (comma-separated)
    #[arg(long, env = "RELEASE_POM_EXCLUDE_GROUP_IDS")]
    pub exclude_group_ids: Option<String>,

    // Artifact filters
    /// Artifact ids to include (comma-separated)
    #[arg(long, env = "RELEASE_POM_INCLUDE_ARTIFACT_IDS")]
    pub include_artifact_ids: Option<String>,

    /// Artifact ids to exclude (comma-separated)
    #[arg(long, env = "RELEASE_POM_EXCLUDE_ARTIFACT_IDS")]
    pub exclude_artifact_ids: Option<String>,

    /// Only describe dependencies the project declares directly
    /// (`--exclude-transitive=false` turns a config file setting off)
    #[arg(
        long,
        env = "RELEASE_POM_EXCLUDE_TRANSITIVE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub exclude_transitive: Option<bool>,

    // Classifier translation
    /// Describe the artifacts with this classifier instead (e.g. sources)
    #[arg(long, env = "RELEASE_POM_CLASSIFIER")]
    pub classifier: Option<String>,

    /// Type of classifier-translated artifacts (default: keep original type)
    #[arg(long = "type", env = "RELEASE_POM_TYPE")]
    pub artifact_type: Option<String>,

    // Output options
    /// Write the descriptor here instead of stdout
    #[arg(short, long, env = "RELEASE_POM_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Output the descriptor as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file (default: ./release-pom.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    // General options
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CliArgs {
    /// Default log filter directive for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
