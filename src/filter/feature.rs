//! Include/exclude stages keyed on one artifact attribute

use super::tokens::TokenList;
use super::ArtifactFilter;
use crate::domain::Artifact;

/// The artifact attribute a stage matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Scope,
    Type,
    Classifier,
    GroupId,
    ArtifactId,
}

impl Feature {
    /// Attribute value; absent classifier/scope read as the empty string
    pub fn value<'a>(&self, artifact: &'a Artifact) -> &'a str {
        match self {
            Feature::Scope => artifact.scope_str(),
            Feature::Type => &artifact.artifact_type,
            Feature::Classifier => artifact.classifier_str(),
            Feature::GroupId => &artifact.group_id,
            Feature::ArtifactId => &artifact.artifact_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Scope => "scope",
            Feature::Type => "type",
            Feature::Classifier => "classifier",
            Feature::GroupId => "groupId",
            Feature::ArtifactId => "artifactId",
        }
    }
}

/// Keeps artifacts matching an include token, then drops those matching an
/// exclude token. Both lists empty passes everything through.
#[derive(Debug, Clone)]
pub struct FeatureFilter {
    feature: Feature,
    include: TokenList,
    exclude: TokenList,
}

impl FeatureFilter {
    pub fn new(feature: Feature, include: TokenList, exclude: TokenList) -> Self {
        Self {
            feature,
            include,
            exclude,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    fn accepts(&self, artifact: &Artifact) -> bool {
        let value = self.feature.value(artifact);
        if !self.include.is_empty() && !self.include.matches(value) {
            return false;
        }
        !self.exclude.matches(value)
    }
}

impl ArtifactFilter for FeatureFilter {
    fn name(&self) -> &'static str {
        self.feature.name()
    }

    fn filter(&self, artifacts: Vec<Artifact>) -> Vec<Artifact> {
        if self.is_noop() {
            return artifacts;
        }
        artifacts.into_iter().filter(|a| self.accepts(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> TokenList {
        TokenList::parse(raw)
    }

    fn sample() -> Vec<Artifact> {
        vec![
            Artifact::new("org.a", "a", "1.0").with_scope("compile"),
            Artifact::new("org.b", "b", "2.0").with_scope("test"),
            Artifact::new("org.c", "c", "3.0")
                .with_type("pom")
                .with_classifier("tests"),
        ]
    }

    fn ids(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|a| a.artifact_id.as_str()).collect()
    }

    #[test]
    fn test_noop_passes_all() {
        let filter = FeatureFilter::new(Feature::Scope, tokens(""), tokens(""));
        assert!(filter.is_noop());
        assert_eq!(filter.filter(sample()), sample());
    }

    #[test]
    fn test_include_scope() {
        let filter = FeatureFilter::new(Feature::Scope, tokens("compile"), tokens(""));
        assert_eq!(ids(&filter.filter(sample())), vec!["a"]);
    }

    #[test]
    fn test_exclude_scope() {
        let filter = FeatureFilter::new(Feature::Scope, tokens(""), tokens("test"));
        assert_eq!(ids(&filter.filter(sample())), vec!["a", "c"]);
    }

    #[test]
    fn test_include_and_exclude() {
        let filter = FeatureFilter::new(Feature::Type, tokens("jar,pom"), tokens("pom"));
        assert_eq!(ids(&filter.filter(sample())), vec!["a", "b"]);
    }

    #[test]
    fn test_absent_attribute_never_matches_include() {
        let filter = FeatureFilter::new(Feature::Classifier, tokens("tests"), tokens(""));
        assert_eq!(ids(&filter.filter(sample())), vec!["c"]);
    }

    #[test]
    fn test_group_and_artifact_ids() {
        let filter = FeatureFilter::new(Feature::GroupId, tokens(""), tokens("org.b"));
        assert_eq!(ids(&filter.filter(sample())), vec!["a", "c"]);

        let filter = FeatureFilter::new(Feature::ArtifactId, tokens("b,c"), tokens(""));
        assert_eq!(ids(&filter.filter(sample())), vec!["b", "c"]);
    }

    #[test]
    fn test_feature_names() {
        assert_eq!(Feature::GroupId.name(), "groupId");
        assert_eq!(Feature::Type.name(), "type");
    }
}
