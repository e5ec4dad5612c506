//! Maven integration: classify a Maven project's build outputs for image layering.
//!
//! The project model here is plain data. Whatever reads the POM and resolves the
//! dependency graph (the Maven plugin host, in practice) fills it in.

mod model;

pub use model::*;

use std::path::PathBuf;

use crepe_build_model::{BuildModelError, SourceFilesConfiguration};
use crepe_source_files::{ResolveError, ResolvedSourceFiles};

#[derive(Debug, thiserror::Error)]
pub enum MavenError {
    #[error(transparent)]
    Model(#[from] BuildModelError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Source files configuration for a Maven project.
///
/// Resolved eagerly from the project's `target/classes` (or whatever
/// `build.outputDirectory` points at), its resource directories, its source
/// directory and its resolved artifacts.
#[derive(Debug, Clone)]
pub struct MavenSourceFilesConfiguration {
    resolved: ResolvedSourceFiles,
}

impl MavenSourceFilesConfiguration {
    pub fn new(project: &MavenProject) -> Result<Self, MavenError> {
        let inputs = project.to_source_inputs()?;
        tracing::debug!(
            target: "crepe.maven",
            project = %project.display_name(),
            artifacts = inputs.dependency_paths.len(),
            resource_dirs = inputs.resource_dirs.len(),
            "resolving maven source files"
        );
        let resolved = ResolvedSourceFiles::resolve(&inputs)?;
        Ok(Self { resolved })
    }

    pub fn resolved(&self) -> &ResolvedSourceFiles {
        &self.resolved
    }

    pub fn into_resolved(self) -> ResolvedSourceFiles {
        self.resolved
    }
}

impl SourceFilesConfiguration for MavenSourceFilesConfiguration {
    fn dependencies_files(&self) -> &[PathBuf] {
        self.resolved.dependencies_files()
    }

    fn resources_files(&self) -> &[PathBuf] {
        self.resolved.resources_files()
    }

    fn classes_files(&self) -> &[PathBuf] {
        self.resolved.classes_files()
    }
}
