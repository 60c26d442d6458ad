//! Classifier translation
//!
//! Maps each artifact onto its sibling carrying a fixed classifier (and
//! optionally a fixed type), e.g. `core-1.0.jar` → `core-1.0-sources.jar`.

use crate::domain::Artifact;

#[derive(Debug, Clone)]
pub struct ClassifierTranslator {
    classifier: String,
    artifact_type: Option<String>,
}

impl ClassifierTranslator {
    /// `artifact_type` of `None` (or empty) keeps each artifact's own type
    pub fn new(classifier: impl Into<String>, artifact_type: Option<String>) -> Self {
        Self {
            classifier: classifier.into(),
            artifact_type: artifact_type.filter(|t| !t.is_empty()),
        }
    }

    pub fn translate(&self, artifacts: &[Artifact]) -> Vec<Artifact> {
        artifacts.iter().map(|a| self.translate_one(a)).collect()
    }

    fn translate_one(&self, artifact: &Artifact) -> Artifact {
        let artifact_type = self
            .artifact_type
            .clone()
            .unwrap_or_else(|| artifact.artifact_type.clone());

        let mut translated = Artifact::new(
            artifact.group_id.clone(),
            artifact.artifact_id.clone(),
            artifact.version.clone(),
        )
        .with_type(artifact_type)
        .with_classifier(self.classifier.clone());
        translated.scope = artifact.scope.clone();
        translated
    }
}
