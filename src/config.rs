//! Configuration for a release-pom run
//!
//! Settings are read from (lowest to highest priority):
//! - defaults (no filtering, print to stdout)
//! - release-pom.toml in the working directory, or the file given by --config
//! - command-line flags and their RELEASE_POM_* environment variables

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::filter::DependencyCriteria;
use crate::output::{OutputDestination, OutputFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILENAME: &str = "release-pom.toml";

/// Contents of a configuration file. Keys match the plugin parameter names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileConfig {
    #[serde(flatten)]
    pub criteria: DependencyCriteria,
    pub output_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parse configuration file content
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a configuration file that must exist
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Read `release-pom.toml` from a directory, if there is one
    pub fn from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::from_path(&path).map(Some)
    }
}

/// Settings for one run, fixed before any filtering starts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleasePomConfig {
    pub criteria: DependencyCriteria,
    pub output: OutputDestination,
    pub format: OutputFormat,
}

impl ReleasePomConfig {
    pub fn new(criteria: DependencyCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: OutputDestination) -> Self {
        self.output = output;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the configuration from CLI arguments, layered over the config
    /// file found via `--config` or in `base_dir`
    pub fn load(args: &CliArgs, base_dir: &Path) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => Some(FileConfig::from_path(path)?),
            None => FileConfig::from_dir(base_dir)?,
        };

        if file.is_some() {
            tracing::debug!("using configuration file");
        }

        Ok(Self::from_sources(file.unwrap_or_default(), args))
    }

    /// Overlay CLI arguments on file settings
    pub fn from_sources(file: FileConfig, args: &CliArgs) -> Self {
        let mut criteria = file.criteria;

        let overrides = [
            (&mut criteria.include_scope, &args.include_scope),
            (&mut criteria.exclude_scope, &args.exclude_scope),
            (&mut criteria.include_types, &args.include_types),
            (&mut criteria.exclude_types, &args.exclude_types),
            (&mut criteria.include_classifiers, &args.include_classifiers),
            (&mut criteria.exclude_classifiers, &args.exclude_classifiers),
            (&mut criteria.include_group_ids, &args.include_group_ids),
            (&mut criteria.exclude_group_ids, &args.exclude_group_ids),
            (&mut criteria.include_artifact_ids, &args.include_artifact_ids),
            (&mut criteria.exclude_artifact_ids, &args.exclude_artifact_ids),
            (&mut criteria.classifier, &args.classifier),
            (&mut criteria.artifact_type, &args.artifact_type),
        ];
        for (target, value) in overrides {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        if let Some(exclude) = args.exclude_transitive {
            criteria.exclude_transitive = exclude;
        }

        let output_file = args.output_file.clone().or(file.output_file);
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Pom
        };

        Self {
            criteria,
            output: OutputDestination::from_option(output_file.as_deref()),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["release-pom"];
        argv.extend(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = ReleasePomConfig::from_sources(FileConfig::default(), &args(&[]));
        assert_eq!(config.criteria, DependencyCriteria::new());
        assert_eq!(config.output, OutputDestination::Stdout);
        assert_eq!(config.format, OutputFormat::Pom);
    }

    #[test]
    fn test_file_config_parse() {
        let content = r#"
includeScope = "compile, runtime"
excludeGroupIds = "org.internal"
excludeTransitive = true
classifier = "sources"
outputFile = "target/release-pom.xml"
"#;
        let file = FileConfig::parse(content, Path::new("release-pom.toml")).unwrap();
        assert_eq!(file.criteria.include_scope, "compile, runtime");
        assert_eq!(file.criteria.exclude_group_ids, "org.internal");
        assert!(file.criteria.exclude_transitive);
        assert_eq!(file.criteria.classifier, "sources");
        assert_eq!(file.output_file, Some(PathBuf::from("target/release-pom.xml")));
    }

    #[test]
    fn test_file_config_parse_error() {
        let err = FileConfig::parse("includeScope = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            criteria: DependencyCriteria::new()
                .with_include_scope("runtime")
                .with_exclude_types("pom"),
            output_file: Some(PathBuf::from("from-file.xml")),
        };
        let config = ReleasePomConfig::from_sources(
            file,
            &args(&["--include-scope", "compile", "-o", "from-cli.xml"]),
        );
        assert_eq!(config.criteria.include_scope, "compile");
        assert_eq!(config.criteria.exclude_types, "pom");
        assert_eq!(
            config.output,
            OutputDestination::File(PathBuf::from("from-cli.xml"))
        );
    }

    #[test]
    fn test_exclude_transitive_from_either_source() {
        let file = FileConfig {
            criteria: DependencyCriteria::new().with_exclude_transitive(true),
            output_file: None,
        };
        let config = ReleasePomConfig::from_sources(file, &args(&[]));
        assert!(config.criteria.exclude_transitive);

        let config =
            ReleasePomConfig::from_sources(FileConfig::default(), &args(&["--exclude-transitive"]));
        assert!(config.criteria.exclude_transitive);
    }

    #[test]
    fn test_cli_turns_off_file_exclude_transitive() {
        let file = FileConfig {
            criteria: DependencyCriteria::new().with_exclude_transitive(true),
            output_file: None,
        };
        let config =
            ReleasePomConfig::from_sources(file, &args(&["--exclude-transitive=false"]));
        assert!(!config.criteria.exclude_transitive);
    }

    #[test]
    fn test_json_format() {
        let config = ReleasePomConfig::from_sources(FileConfig::default(), &args(&["--json"]));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "excludeScope = \"test\"\n").unwrap();
        let config = ReleasePomConfig::load(&args(&[]), dir.path()).unwrap();
        assert_eq!(config.criteria.exclude_scope, "test");
    }

    #[test]
    fn test_load_without_file() {
        let dir = TempDir::new().unwrap();
        let config = ReleasePomConfig::load(&args(&[]), dir.path()).unwrap();
        assert_eq!(config, ReleasePomConfig::default());
    }

    #[test]
    fn test_load_explicit_missing_config() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let cli = args(&["--config", missing.to_str().unwrap()]);
        let err = ReleasePomConfig::load(&cli, dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
