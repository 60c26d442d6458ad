//! Drops artifacts the project does not declare directly

use super::ArtifactFilter;
use crate::domain::{Artifact, ArtifactKey};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct TransitivityFilter {
    direct: HashSet<ArtifactKey>,
    exclude_transitive: bool,
}

impl TransitivityFilter {
    pub fn new(direct_dependencies: &[Artifact], exclude_transitive: bool) -> Self {
        Self {
            direct: direct_dependencies.iter().map(Artifact::key).collect(),
            exclude_transitive,
        }
    }
}

impl ArtifactFilter for TransitivityFilter {
    fn name(&self) -> &'static str {
        "transitivity"
    }

    fn filter(&self, artifacts: Vec<Artifact>) -> Vec<Artifact> {
        if !self.exclude_transitive {
            return artifacts;
        }
        artifacts
            .into_iter()
            .filter(|a| self.direct.contains(&a.key()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<Artifact> {
        vec![
            Artifact::new("org.a", "a", "1.0").with_scope("compile"),
            Artifact::new("org.t", "transitive", "1.0").with_scope("compile"),
        ]
    }

    #[test]
    fn test_disabled_keeps_transitive() {
        let direct = vec![Artifact::new("org.a", "a", "1.0")];
        let filter = TransitivityFilter::new(&direct, false);
        assert_eq!(filter.filter(all()).len(), 2);
    }

    #[test]
    fn test_enabled_keeps_direct_only() {
        let direct = vec![Artifact::new("org.a", "a", "1.0")];
        let filter = TransitivityFilter::new(&direct, true);
        let kept = filter.filter(all());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].artifact_id, "a");
        // scope from the full set is preserved
        assert_eq!(kept[0].scope_str(), "compile");
    }

    #[test]
    fn test_identity_includes_version() {
        let direct = vec![Artifact::new("org.a", "a", "2.0")];
        let filter = TransitivityFilter::new(&direct, true);
        assert!(filter.filter(all()).is_empty());
    }

    #[test]
    fn test_no_direct_dependencies() {
        let filter = TransitivityFilter::new(&[], true);
        assert!(filter.filter(all()).is_empty());
    }
}
