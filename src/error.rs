//! Application error types using thiserror
//!
//! Error hierarchy:
//! - FilterError: A filter criterion could not be parsed
//! - ResolutionError: Dependencies left unresolved after filtering
//! - InputError: Issues reading the host's resolution report
//! - ConfigError: Issues with the configuration file
//! - IoError: Failures writing the generated descriptor

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Filter configuration errors
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Unresolved dependency errors
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Resolution report errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration file errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// A comma-separated criteria list that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Scope name the host does not know about
    #[error("invalid scope '{scope}' in {option}: expected one of compile, provided, runtime, test, system, import")]
    UnknownScope { option: String, scope: String },
}

/// Errors raised when the filtered set cannot be rendered faithfully
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// One or more artifacts were not resolved by the host
    #[error("unable to reliably determine dependencies: {count} unresolved")]
    Unresolved { count: usize, report: String },
}

/// Errors related to the host's resolution report
#[derive(Error, Debug)]
pub enum InputError {
    /// Report file not found
    #[error("resolution report not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read report file
    #[error("failed to read resolution report {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Report file extension not recognised
    #[error("unsupported resolution report format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to write the descriptor
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to standard output
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    /// Failed to render the descriptor text
    #[error("failed to render descriptor: {0}")]
    Render(#[source] std::io::Error),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Resolution(_) => 2,
            _ => 1,
        }
    }
}

impl FilterError {
    /// Creates a new UnknownScope error
    pub fn unknown_scope(option: impl Into<String>, scope: impl Into<String>) -> Self {
        FilterError::UnknownScope {
            option: option.into(),
            scope: scope.into(),
        }
    }
}

impl ResolutionError {
    /// Full listing of resolved and unresolved artifacts
    pub fn report(&self) -> &str {
        match self {
            ResolutionError::Unresolved { report, .. } => report,
        }
    }
}

impl InputError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        InputError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InputError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InputError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::WriteError {
            path: path.into(),
            source,
        }
    }
}
