//! Dependency filtering
//!
//! This module provides:
//! - `DependencyCriteria`, the include/exclude settings per dimension
//! - `FilterChain`, an ordered list of stages folded over the artifact set
//! - Marker mode and classifier-translation mode partitioning

mod feature;
mod tokens;
mod transitivity;
mod translate;

pub use feature::{Feature, FeatureFilter};
pub use tokens::{clean_tokenized_string, TokenList, KNOWN_SCOPES};
pub use transitivity::TransitivityFilter;
pub use translate::ClassifierTranslator;

use crate::domain::{Artifact, DependencyStatusSets, ResolutionStatus};
use crate::error::FilterError;
use crate::host::ArtifactResolver;
use serde::{Deserialize, Serialize};

/// A single set-narrowing stage
pub trait ArtifactFilter {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Return the subset of `artifacts` this stage accepts, in input order
    fn filter(&self, artifacts: Vec<Artifact>) -> Vec<Artifact>;
}

/// Raw filter settings. Each list is a comma-separated string; an empty
/// string disables that side of the stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependencyCriteria {
    pub include_scope: String,
    pub exclude_scope: String,
    pub include_types: String,
    pub exclude_types: String,
    pub include_classifiers: String,
    pub exclude_classifiers: String,
    pub include_group_ids: String,
    pub exclude_group_ids: String,
    pub include_artifact_ids: String,
    pub exclude_artifact_ids: String,
    /// Keep only artifacts the project declares directly
    pub exclude_transitive: bool,
    /// Switches to classifier-translation mode when non-empty
    pub classifier: String,
    /// Type given to translated artifacts; empty keeps the original type
    #[serde(rename = "type")]
    pub artifact_type: String,
}

impl DependencyCriteria {
    /// Create criteria that accept everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_scope(mut self, value: impl Into<String>) -> Self {
        self.include_scope = value.into();
        self
    }

    pub fn with_exclude_scope(mut self, value: impl Into<String>) -> Self {
        self.exclude_scope = value.into();
        self
    }

    pub fn with_include_types(mut self, value: impl Into<String>) -> Self {
        self.include_types = value.into();
        self
    }

    pub fn with_exclude_types(mut self, value: impl Into<String>) -> Self {
        self.exclude_types = value.into();
        self
    }

    pub fn with_include_classifiers(mut self, value: impl Into<String>) -> Self {
        self.include_classifiers = value.into();
        self
    }

    pub fn with_exclude_classifiers(mut self, value: impl Into<String>) -> Self {
        self.exclude_classifiers = value.into();
        self
    }

    pub fn with_include_group_ids(mut self, value: impl Into<String>) -> Self {
        self.include_group_ids = value.into();
        self
    }

    pub fn with_exclude_group_ids(mut self, value: impl Into<String>) -> Self {
        self.exclude_group_ids = value.into();
        self
    }

    pub fn with_include_artifact_ids(mut self, value: impl Into<String>) -> Self {
        self.include_artifact_ids = value.into();
        self
    }

    pub fn with_exclude_artifact_ids(mut self, value: impl Into<String>) -> Self {
        self.exclude_artifact_ids = value.into();
        self
    }

    pub fn with_exclude_transitive(mut self, exclude: bool) -> Self {
        self.exclude_transitive = exclude;
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    /// Classifier for translation mode, if that mode is selected
    pub fn translation_classifier(&self) -> Option<&str> {
        let classifier = self.classifier.trim();
        (!classifier.is_empty()).then_some(classifier)
    }
}

/// Stages applied left to right: transitivity, scope, type, classifier,
/// groupId, artifactId
pub struct FilterChain {
    stages: Vec<Box<dyn ArtifactFilter>>,
}

impl FilterChain {
    /// Parse every criteria list up front so an unknown scope aborts before
    /// any artifact is touched
    pub fn from_criteria(
        criteria: &DependencyCriteria,
        direct_dependencies: &[Artifact],
    ) -> Result<Self, FilterError> {
        let scope = FeatureFilter::new(
            Feature::Scope,
            TokenList::parse_scopes("includeScope", &criteria.include_scope)?,
            TokenList::parse_scopes("excludeScope", &criteria.exclude_scope)?,
        );
        let types = FeatureFilter::new(
            Feature::Type,
            TokenList::parse(&criteria.include_types),
            TokenList::parse(&criteria.exclude_types),
        );
        let classifiers = FeatureFilter::new(
            Feature::Classifier,
            TokenList::parse(&criteria.include_classifiers),
            TokenList::parse(&criteria.exclude_classifiers),
        );
        let group_ids = FeatureFilter::new(
            Feature::GroupId,
            TokenList::parse(&criteria.include_group_ids),
            TokenList::parse(&criteria.exclude_group_ids),
        );
        let artifact_ids = FeatureFilter::new(
            Feature::ArtifactId,
            TokenList::parse(&criteria.include_artifact_ids),
            TokenList::parse(&criteria.exclude_artifact_ids),
        );

        Ok(Self::new()
            .with_stage(TransitivityFilter::new(
                direct_dependencies,
                criteria.exclude_transitive,
            ))
            .with_stage(scope)
            .with_stage(types)
            .with_stage(classifiers)
            .with_stage(group_ids)
            .with_stage(artifact_ids))
    }

    /// An empty chain that passes everything through
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain
    pub fn with_stage(mut self, stage: impl ArtifactFilter + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage over the artifacts
    pub fn apply(&self, artifacts: Vec<Artifact>) -> Vec<Artifact> {
        self.stages.iter().fold(artifacts, |remaining, stage| {
            let before = remaining.len();
            let kept = stage.filter(remaining);
            tracing::debug!(stage = stage.name(), before, after = kept.len(), "filter stage");
            kept
        })
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter the project's artifacts and split the survivors by resolution
/// status.
///
/// In marker mode each survivor keeps the status the host reported for it.
/// With a classifier configured the survivors are first translated to their
/// classified siblings, which carry no status of their own, so those are
/// looked up through the resolver.
pub fn filter_dependencies(
    artifacts: &[Artifact],
    criteria: &DependencyCriteria,
    resolver: &dyn ArtifactResolver,
) -> Result<DependencyStatusSets, FilterError> {
    let chain = FilterChain::from_criteria(criteria, resolver.direct_dependencies())?;
    let survivors = chain.apply(artifacts.to_vec());

    let sets = match criteria.translation_classifier() {
        Some(classifier) => {
            tracing::debug!(classifier, "translating artifacts to classifier");
            let artifact_type = Some(criteria.artifact_type.trim().to_string());
            let translated =
                ClassifierTranslator::new(classifier, artifact_type).translate(&survivors);
            partition(translated, |artifact| resolver.resolve_status(artifact))
        }
        None => partition(survivors, Artifact::status),
    };

    Ok(sets)
}

fn partition<F>(artifacts: Vec<Artifact>, status_of: F) -> DependencyStatusSets
where
    F: Fn(&Artifact) -> ResolutionStatus,
{
    let mut sets = DependencyStatusSets::default();
    for mut artifact in artifacts {
        artifact.resolved = status_of(&artifact).is_resolved();
        if artifact.resolved {
            sets.resolved.push(artifact);
        } else {
            sets.unresolved.push(artifact);
        }
    }
    sets
}
