//! release-pom - release POM generator library
//!
//! This library provides the core functionality for describing a project's
//! resolved dependency set as a POM:
//! - Filtering by transitivity, scope, type, classifier, groupId and artifactId
//! - Classifier translation (e.g. describing the `sources` artifacts instead)
//! - Refusing to render when a dependency is unresolved
//! - Rendering the descriptor to stdout or a file

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod host;
pub mod mojo;
pub mod output;
