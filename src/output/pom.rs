//! POM descriptor rendering
//!
//! Produces a `<project>` document with an optional `<parent>` block and a
//! `<dependencies>` block listing the artifacts in the order received.

use crate::domain::{Artifact, ParentRef, ProjectDescriptor};
use crate::output::DescriptorFormatter;
use std::fmt::Write;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const PROJECT_OPEN: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">"#;
const MODEL_VERSION: &str = "4.0.0";
const INDENT: &str = "  ";

/// Formatter emitting Maven POM XML
#[derive(Debug, Clone, Copy, Default)]
pub struct PomFormatter;

impl PomFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorFormatter for PomFormatter {
    fn render(
        &self,
        project: &ProjectDescriptor,
        dependencies: &[Artifact],
    ) -> std::io::Result<String> {
        Ok(render(project, dependencies))
    }
}

/// Render the descriptor for `project` listing `dependencies`
pub fn render(project: &ProjectDescriptor, dependencies: &[Artifact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", XML_HEADER);
    let _ = writeln!(out, "{}", PROJECT_OPEN);
    element(&mut out, 1, "modelVersion", MODEL_VERSION);

    match &project.parent {
        Some(parent) => render_parent(&mut out, parent),
        None => tracing::debug!(project = %project.coordinates(), "no parent, omitting parent block"),
    }

    element(&mut out, 1, "groupId", &project.group_id);
    element(&mut out, 1, "artifactId", &project.artifact_id);
    element(&mut out, 1, "version", &project.version);
    optional_element(&mut out, 1, "packaging", project.packaging.as_deref());
    optional_element(&mut out, 1, "name", project.name.as_deref());
    optional_element(&mut out, 1, "description", project.description.as_deref());

    open(&mut out, 1, "dependencies");
    for dependency in dependencies {
        render_dependency(&mut out, dependency);
    }
    close(&mut out, 1, "dependencies");

    let _ = writeln!(out, "</project>");
    out
}

fn render_parent(out: &mut String, parent: &ParentRef) {
    open(out, 1, "parent");
    element(out, 2, "groupId", &parent.group_id);
    element(out, 2, "artifactId", &parent.artifact_id);
    element(out, 2, "version", &parent.version);
    optional_element(out, 2, "relativePath", parent.relative_path.as_deref());
    close(out, 1, "parent");
}

fn render_dependency(out: &mut String, artifact: &Artifact) {
    open(out, 2, "dependency");
    element(out, 3, "groupId", &artifact.group_id);
    element(out, 3, "artifactId", &artifact.artifact_id);
    element(out, 3, "version", &artifact.version);
    element(out, 3, "type", &artifact.artifact_type);
    optional_element(out, 3, "classifier", artifact.classifier.as_deref());
    optional_element(out, 3, "scope", artifact.scope.as_deref());
    close(out, 2, "dependency");
}

fn open(out: &mut String, depth: usize, tag: &str) {
    let _ = writeln!(out, "{}<{}>", INDENT.repeat(depth), tag);
}

fn close(out: &mut String, depth: usize, tag: &str) {
    let _ = writeln!(out, "{}</{}>", INDENT.repeat(depth), tag);
}

fn element(out: &mut String, depth: usize, tag: &str, value: &str) {
    let _ = writeln!(
        out,
        "{}<{}>{}</{}>",
        INDENT.repeat(depth),
        tag,
        escape(value),
        tag
    );
}

// Absent or empty values are left out entirely
fn optional_element(out: &mut String, depth: usize, tag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        element(out, depth, tag, value);
    }
}

/// Escape XML text content
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
