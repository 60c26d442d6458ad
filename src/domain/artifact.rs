//! Artifact identity and resolution status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Packaging type assumed when the host omits one
pub const DEFAULT_TYPE: &str = "jar";

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

fn default_resolved() -> bool {
    true
}

/// Whether the host located a concrete file for an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStatus {
    Resolved,
    Unresolved,
}

impl ResolutionStatus {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionStatus::Resolved)
    }
}

/// A build dependency as handed over by the host resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Group identifier, e.g. `org.apache.commons`
    #[serde(default)]
    pub group_id: String,
    /// Artifact identifier, e.g. `commons-lang3`
    #[serde(default)]
    pub artifact_id: String,
    /// Concrete version selected by the host
    #[serde(default)]
    pub version: String,
    /// Packaging type (`jar`, `pom`, `war`, ...)
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: String,
    /// Optional classifier (`sources`, `tests`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Optional scope (`compile`, `test`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Whether the host resolved this artifact
    #[serde(default = "default_resolved")]
    pub resolved: bool,
}

impl Artifact {
    /// Creates a resolved `jar` artifact without classifier or scope
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: default_type(),
            classifier: None,
            scope: None,
            resolved: true,
        }
    }

    /// Sets the packaging type (builder pattern)
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    /// Sets the classifier (builder pattern)
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Sets the scope (builder pattern)
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Marks the artifact as unresolved (builder pattern)
    pub fn unresolved(mut self) -> Self {
        self.resolved = false;
        self
    }

    /// Resolution status as recorded by the host
    pub fn status(&self) -> ResolutionStatus {
        if self.resolved {
            ResolutionStatus::Resolved
        } else {
            ResolutionStatus::Unresolved
        }
    }

    /// Classifier, or the empty string when absent
    pub fn classifier_str(&self) -> &str {
        self.classifier.as_deref().unwrap_or("")
    }

    /// Scope, or the empty string when absent
    pub fn scope_str(&self) -> &str {
        self.scope.as_deref().unwrap_or("")
    }

    /// Identity used to compare artifacts across host collections.
    /// Scope and resolution status are not part of it.
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            artifact_type: self.artifact_type.clone(),
            classifier: self.classifier.clone().filter(|c| !c.is_empty()),
            version: self.version.clone(),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())?;
        if let Some(scope) = self.scope.as_deref().filter(|s| !s.is_empty()) {
            write!(f, ":{}", scope)?;
        }
        Ok(())
    }
}

/// `group:artifact:type[:classifier]:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    pub artifact_type: String,
    pub classifier: Option<String>,
    pub version: String,
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id, self.artifact_id, self.artifact_type
        )?;
        if let Some(ref classifier) = self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}
