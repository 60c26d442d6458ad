//! JSON output formatter for machine processing

use crate::domain::{Artifact, ProjectDescriptor};
use crate::output::DescriptorFormatter;
use serde::Serialize;

/// JSON formatter for machine-readable output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the descriptor
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDescriptor<'a> {
    #[serde(flatten)]
    project: &'a ProjectDescriptor,
    dependencies: Vec<JsonDependency<'a>>,
}

/// JSON representation of one dependency
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDependency<'a> {
    group_id: &'a str,
    artifact_id: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    artifact_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
}

impl<'a> From<&'a Artifact> for JsonDependency<'a> {
    fn from(artifact: &'a Artifact) -> Self {
        Self {
            group_id: &artifact.group_id,
            artifact_id: &artifact.artifact_id,
            version: &artifact.version,
            artifact_type: &artifact.artifact_type,
            classifier: artifact.classifier.as_deref(),
            scope: artifact.scope.as_deref(),
        }
    }
}

impl DescriptorFormatter for JsonFormatter {
    fn render(
        &self,
        project: &ProjectDescriptor,
        dependencies: &[Artifact],
    ) -> std::io::Result<String> {
        let descriptor = JsonDescriptor {
            project,
            dependencies: dependencies.iter().map(JsonDependency::from).collect(),
        };
        let mut json = serde_json::to_string_pretty(&descriptor).map_err(std::io::Error::other)?;
        json.push('\n');
        Ok(json)
    }
}
