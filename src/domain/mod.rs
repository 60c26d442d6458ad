//! Core domain models for release-pom
//!
//! This module contains the fundamental types used throughout the application:
//! - Artifact identity and resolution status
//! - Project and parent metadata rendered into the descriptor
//! - The resolved/unresolved partition produced by filtering

mod artifact;
mod project;
mod status_sets;

pub use artifact::{Artifact, ArtifactKey, ResolutionStatus, DEFAULT_TYPE};
pub use project::{ParentRef, ProjectDescriptor};
pub use status_sets::DependencyStatusSets;
