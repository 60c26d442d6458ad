//! Resolved/unresolved partition produced by the filter chain

use super::Artifact;
use serde::Serialize;
use std::fmt::Write;

/// Filtered artifacts split by resolution status.
///
/// Both sides keep the order the artifacts had when they entered the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyStatusSets {
    pub resolved: Vec<Artifact>,
    pub unresolved: Vec<Artifact>,
}

impl DependencyStatusSets {
    pub fn new(resolved: Vec<Artifact>, unresolved: Vec<Artifact>) -> Self {
        Self {
            resolved,
            unresolved,
        }
    }

    /// Returns true if every surviving artifact was resolved
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Total number of artifacts across both sets
    pub fn len(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates resolved then unresolved artifacts
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.resolved.iter().chain(self.unresolved.iter())
    }

    /// Human-readable listing of both sets, one sorted artifact id per line
    pub fn report(&self, show_scope: bool) -> String {
        let mut out = String::new();

        let _ = writeln!(out);
        let _ = writeln!(out, "The following files have been resolved:");
        write_section(&mut out, &self.resolved, show_scope);

        if !self.unresolved.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "The following files have NOT been resolved:");
            write_section(&mut out, &self.unresolved, show_scope);
        }

        out
    }
}

fn write_section(out: &mut String, artifacts: &[Artifact], show_scope: bool) {
    if artifacts.is_empty() {
        let _ = writeln!(out, "   none");
        return;
    }

    let mut lines: Vec<String> = artifacts
        .iter()
        .map(|a| {
            if show_scope {
                a.to_string()
            } else {
                a.key().to_string()
            }
        })
        .collect();
    lines.sort();

    for line in lines {
        let _ = writeln!(out, "   {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sets() {
        let sets = DependencyStatusSets::default();
        assert!(sets.is_empty());
        assert!(sets.is_fully_resolved());
        assert_eq!(sets.len(), 0);
    }

    #[test]
    fn test_len_and_iter_order() {
        let sets = DependencyStatusSets::new(
            vec![Artifact::new("g", "a", "1")],
            vec![Artifact::new("g", "b", "1").unresolved()],
        );
        assert_eq!(sets.len(), 2);
        assert!(!sets.is_fully_resolved());
        let ids: Vec<_> = sets.iter().map(|a| a.artifact_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_report_none_resolved() {
        let report = DependencyStatusSets::default().report(false);
        assert!(report.contains("The following files have been resolved:\n   none\n"));
        assert!(!report.contains("NOT been resolved"));
    }

    #[test]
    fn test_report_sorted_with_scope() {
        let sets = DependencyStatusSets::new(
            vec![
                Artifact::new("org.z", "z", "1").with_scope("compile"),
                Artifact::new("org.a", "a", "2").with_scope("test"),
            ],
            vec![Artifact::new("org.m", "m", "3").unresolved()],
        );
        let report = sets.report(true);
        let a = report.find("org.a:a:jar:2:test").unwrap();
        let z = report.find("org.z:z:jar:1:compile").unwrap();
        assert!(a < z);
        assert!(report.contains("The following files have NOT been resolved:\n   org.m:m:jar:3\n"));
    }

    #[test]
    fn test_report_without_scope() {
        let sets = DependencyStatusSets::new(
            vec![Artifact::new("g", "a", "1").with_scope("compile")],
            Vec::new(),
        );
        let report = sets.report(false);
        assert!(report.contains("   g:a:jar:1\n"));
        assert!(!report.contains("compile"));
    }
}
