//! Resolution report handed over by the host
//!
//! Supported formats, chosen by file extension:
//! - `.json` (camelCase keys)
//! - `.toml` (same keys, `[[artifacts]]` tables)

use super::ArtifactResolver;
use crate::domain::{Artifact, ArtifactKey, ProjectDescriptor, ResolutionStatus};
use crate::error::InputError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Serialization format of a resolution report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Toml,
}

impl ReportFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ReportFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(ReportFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReport {
    #[serde(default)]
    project: ProjectDescriptor,
    #[serde(default)]
    direct_dependencies: Vec<Artifact>,
    #[serde(default)]
    artifacts: Vec<Artifact>,
    #[serde(default)]
    available: Vec<Artifact>,
}

/// The project's resolved dependency graph as reported by the host
#[derive(Debug, Clone)]
pub struct HostReport {
    project: ProjectDescriptor,
    direct_dependencies: Vec<Artifact>,
    artifacts: Vec<Artifact>,
    index: HashMap<ArtifactKey, ResolutionStatus>,
}

impl HostReport {
    /// Build a report from already-resolved collections
    pub fn new(
        project: ProjectDescriptor,
        direct_dependencies: Vec<Artifact>,
        artifacts: Vec<Artifact>,
    ) -> Self {
        let mut index = HashMap::new();
        index_into(&mut index, &artifacts);
        Self {
            project,
            direct_dependencies,
            artifacts,
            index,
        }
    }

    /// Register artifacts the repository can supply beyond the project's own
    /// graph, such as `sources` jars used by classifier translation
    pub fn with_available(mut self, available: Vec<Artifact>) -> Self {
        index_into(&mut self.index, &available);
        self
    }

    /// Load a report from disk
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::not_found(path));
        }

        let format =
            ReportFormat::from_path(path).ok_or_else(|| InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| InputError::read_error(path, e))?;

        Self::parse(&content, format).map_err(|message| match format {
            ReportFormat::Json => InputError::json_parse_error(path, message),
            ReportFormat::Toml => InputError::toml_parse_error(path, message),
        })
    }

    /// Parse report content in the given format
    pub fn parse(content: &str, format: ReportFormat) -> Result<Self, String> {
        let raw: RawReport = match format {
            ReportFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            ReportFormat::Toml => toml::from_str(content).map_err(|e| e.to_string())?,
        };

        tracing::debug!(
            artifacts = raw.artifacts.len(),
            direct = raw.direct_dependencies.len(),
            available = raw.available.len(),
            "loaded resolution report"
        );

        Ok(Self::new(raw.project, raw.direct_dependencies, raw.artifacts)
            .with_available(raw.available))
    }

    pub fn project(&self) -> &ProjectDescriptor {
        &self.project
    }

    /// Every artifact in the project's resolved graph
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

/// A key is available if any artifact carrying it was resolved
fn index_into(index: &mut HashMap<ArtifactKey, ResolutionStatus>, artifacts: &[Artifact]) {
    for artifact in artifacts {
        let status = artifact.status();
        index
            .entry(artifact.key())
            .and_modify(|existing| {
                if status.is_resolved() {
                    *existing = ResolutionStatus::Resolved;
                }
            })
            .or_insert(status);
    }
}

impl ArtifactResolver for HostReport {
    fn resolve_status(&self, artifact: &Artifact) -> ResolutionStatus {
        self.index
            .get(&artifact.key())
            .copied()
            .unwrap_or(ResolutionStatus::Unresolved)
    }

    fn direct_dependencies(&self) -> &[Artifact] {
        &self.direct_dependencies
    }
}
