//! Output formatting for the generated descriptor
//!
//! This module provides:
//! - POM XML output (the default)
//! - JSON output for machine processing
//! - Destination selection: stdout or a configured file

mod destination;
mod json;
mod pom;

pub use destination::OutputDestination;
pub use json::JsonFormatter;
pub use pom::{escape, render, PomFormatter};

use crate::domain::{Artifact, ProjectDescriptor};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Maven POM XML
    #[default]
    Pom,
    /// JSON for machine processing
    Json,
}

/// Trait for descriptor formatters
pub trait DescriptorFormatter {
    /// Render the project and its dependency list. Inputs are not modified
    /// and dependencies are emitted in the order given.
    fn render(
        &self,
        project: &ProjectDescriptor,
        dependencies: &[Artifact],
    ) -> std::io::Result<String>;
}

/// Create a descriptor formatter for the given format
pub fn create_formatter(format: OutputFormat) -> Box<dyn DescriptorFormatter> {
    match format {
        OutputFormat::Pom => Box::new(PomFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
