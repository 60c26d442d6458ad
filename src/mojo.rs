//! The release-pom operation
//!
//! This module coordinates a single run:
//! filter → refuse on unresolved dependencies → render → emit.
//! Nothing is rendered or written unless every surviving dependency resolved.

use crate::config::ReleasePomConfig;
use crate::domain::{Artifact, DependencyStatusSets, ProjectDescriptor};
use crate::error::{AppError, FilterError, IoError, ResolutionError};
use crate::filter::filter_dependencies;
use crate::host::{ArtifactResolver, HostReport};
use crate::output::create_formatter;
use std::io::Write;

/// Generates a release POM for one project
pub struct ReleasePomMojo {
    config: ReleasePomConfig,
}

impl ReleasePomMojo {
    pub fn new(config: ReleasePomConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReleasePomConfig {
        &self.config
    }

    /// Filter the project's artifacts into resolved and unresolved sets
    pub fn dependency_sets(
        &self,
        artifacts: &[Artifact],
        resolver: &dyn ArtifactResolver,
    ) -> Result<DependencyStatusSets, FilterError> {
        filter_dependencies(artifacts, &self.config.criteria, resolver)
    }

    /// Produce the descriptor text without emitting it
    pub fn generate(
        &self,
        project: &ProjectDescriptor,
        artifacts: &[Artifact],
        resolver: &dyn ArtifactResolver,
    ) -> Result<String, AppError> {
        let sets = self.dependency_sets(artifacts, resolver)?;

        if !sets.is_fully_resolved() {
            tracing::warn!(
                project = %project.coordinates(),
                unresolved = sets.unresolved.len(),
                "unable to reliably determine dependencies"
            );
            return Err(ResolutionError::Unresolved {
                count: sets.unresolved.len(),
                report: sets.report(true),
            }
            .into());
        }

        tracing::debug!(
            project = %project.coordinates(),
            dependencies = sets.resolved.len(),
            "rendering descriptor"
        );
        let text = create_formatter(self.config.format)
            .render(project, &sets.resolved)
            .map_err(IoError::Render)?;
        Ok(text)
    }

    /// Run against a host report and emit the descriptor to the configured
    /// destination
    pub fn execute(&self, report: &HostReport) -> Result<String, AppError> {
        let text = self.generate(report.project(), report.artifacts(), report)?;
        self.config.output.emit(&text)?;
        Ok(text)
    }

    /// Like `execute`, with stdout output going to `writer`
    pub fn execute_to(
        &self,
        report: &HostReport,
        writer: &mut dyn Write,
    ) -> Result<String, AppError> {
        let text = self.generate(report.project(), report.artifacts(), report)?;
        self.config.output.emit_to(&text, writer)?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DependencyCriteria;
    use crate::output::{OutputDestination, OutputFormat};
    use tempfile::TempDir;

    fn report(artifacts: Vec<Artifact>) -> HostReport {
        HostReport::new(
            ProjectDescriptor::new("org.example", "app", "1.0"),
            Vec::new(),
            artifacts,
        )
    }

    fn sample() -> Vec<Artifact> {
        vec![
            Artifact::new("org.a", "a", "1.0").with_scope("compile"),
            Artifact::new("org.b", "b", "2.0").with_scope("test"),
        ]
    }

    #[test]
    fn test_generate_include_scope() {
        let mojo = ReleasePomMojo::new(ReleasePomConfig::new(
            DependencyCriteria::new().with_include_scope("compile"),
        ));
        let host = report(sample());
        let pom = mojo
            .generate(host.project(), host.artifacts(), &host)
            .unwrap();
        assert_eq!(pom.matches("<dependency>").count(), 1);
        assert!(pom.contains("<artifactId>a</artifactId>"));
        assert!(!pom.contains("<artifactId>b</artifactId>"));
    }

    #[test]
    fn test_generate_unresolved_fails() {
        let mojo = ReleasePomMojo::new(ReleasePomConfig::default());
        let host = report(vec![
            Artifact::new("org.a", "a", "1.0"),
            Artifact::new("org.b", "b", "2.0").unresolved(),
        ]);
        let err = mojo
            .generate(host.project(), host.artifacts(), &host)
            .unwrap_err();
        match err {
            AppError::Resolution(ResolutionError::Unresolved { count, report }) => {
                assert_eq!(count, 1);
                assert!(report.contains("NOT been resolved"));
                assert!(report.contains("org.b:b:jar:2.0"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unresolved_filtered_out_is_fine() {
        let mojo = ReleasePomMojo::new(ReleasePomConfig::new(
            DependencyCriteria::new().with_exclude_artifact_ids("b"),
        ));
        let host = report(vec![
            Artifact::new("org.a", "a", "1.0"),
            Artifact::new("org.b", "b", "2.0").unresolved(),
        ]);
        assert!(mojo.generate(host.project(), host.artifacts(), &host).is_ok());
    }

    #[test]
    fn test_generate_filter_error() {
        let mojo = ReleasePomMojo::new(ReleasePomConfig::new(
            DependencyCriteria::new().with_include_scope("compile,bundled"),
        ));
        let host = report(sample());
        let err = mojo
            .generate(host.project(), host.artifacts(), &host)
            .unwrap_err();
        assert!(matches!(err, AppError::Filter(FilterError::UnknownScope { .. })));
    }

    #[test]
    fn test_execute_to_stdout_writer() {
        let mojo = ReleasePomMojo::new(ReleasePomConfig::default());
        let host = report(sample());
        let mut buf = Vec::new();
        let text = mojo.execute_to(&host, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), text);
    }

    #[test]
    fn test_execute_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("release-pom.xml");
        let mojo = ReleasePomMojo::new(
            ReleasePomConfig::default().with_output(OutputDestination::File(path.clone())),
        );
        let host = report(sample());
        let mut buf = Vec::new();
        let text = mojo.execute_to(&host, &mut buf).unwrap();
        assert!(buf.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_execute_unresolved_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("release-pom.xml");
        let mojo = ReleasePomMojo::new(
            ReleasePomConfig::default().with_output(OutputDestination::File(path.clone())),
        );
        let host = report(vec![Artifact::new("org.a", "a", "1.0").unresolved()]);
        let mut buf = Vec::new();
        assert!(mojo.execute_to(&host, &mut buf).is_err());
        assert!(buf.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_json() {
        let mojo = ReleasePomMojo::new(ReleasePomConfig::default().with_format(OutputFormat::Json));
        let host = report(sample());
        let json = mojo
            .generate(host.project(), host.artifacts(), &host)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dependencies"].as_array().unwrap().len(), 2);
    }
}
