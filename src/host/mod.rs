//! Host build-tool capabilities
//!
//! This module provides:
//! - The `ArtifactResolver` trait through which filtering queries the host
//! - `HostReport`, a resolution report written by the host before invocation

mod report;

pub use report::{HostReport, ReportFormat};

use crate::domain::{Artifact, ResolutionStatus};

/// Services the host build tool supplies to the filter chain
pub trait ArtifactResolver {
    /// Whether the repository can supply an artifact with this identity.
    /// Used for artifacts the project does not declare, such as
    /// classifier-translated ones.
    fn resolve_status(&self, artifact: &Artifact) -> ResolutionStatus;

    /// Dependencies the project declares directly
    fn direct_dependencies(&self) -> &[Artifact];
}
