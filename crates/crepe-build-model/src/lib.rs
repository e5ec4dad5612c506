//! Shared build-output model types used across crepe build system integrations.
//!
//! A build tool integration (Maven, or anything else that knows where a project's
//! compiled outputs live) produces [`SourceInputs`]. The resolver in
//! `crepe-source-files` turns those into the three classified file lists described by
//! [`SourceFilesConfiguration`], which the image layer builder consumes.

mod layer;

pub use layer::*;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Everything the resolver needs to classify a project's build outputs.
///
/// All paths are taken as-is; nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceInputs {
    /// Directory the compiler and resource processor wrote into.
    pub output_dir: PathBuf,
    /// Resource source directories, in declaration order.
    #[serde(default)]
    pub resource_dirs: Vec<PathBuf>,
    /// The (single) classes source directory.
    pub classes_dir: PathBuf,
    /// Resolved dependency artifact files. Order does not matter.
    #[serde(default)]
    pub dependency_paths: Vec<PathBuf>,
}

impl SourceInputs {
    pub fn new(output_dir: impl Into<PathBuf>, classes_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            resource_dirs: Vec::new(),
            classes_dir: classes_dir.into(),
            dependency_paths: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dirs.push(dir.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, path: impl Into<PathBuf>) -> Self {
        self.dependency_paths.push(path.into());
        self
    }

    /// Resolve every relative path against `base`.
    ///
    /// Absolute paths are left untouched.
    pub fn rebase(&mut self, base: &Path) {
        let rebase_one = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        rebase_one(&mut self.output_dir);
        rebase_one(&mut self.classes_dir);
        self.resource_dirs.iter_mut().for_each(rebase_one);
        self.dependency_paths.iter_mut().for_each(rebase_one);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildModelError {
    /// A resolved artifact was handed over without a backing file.
    #[error("artifact {coordinates} has no file attached")]
    ArtifactWithoutFile { coordinates: String },
}

/// Anything that can describe where a project's build outputs live.
///
/// Implemented by build-tool integrations so the resolver never depends on a
/// specific project model.
pub trait SourceInputsProvider {
    fn source_inputs(&self) -> Result<SourceInputs, BuildModelError>;
}

impl SourceInputsProvider for SourceInputs {
    fn source_inputs(&self) -> Result<SourceInputs, BuildModelError> {
        Ok(self.clone())
    }
}

impl<T: SourceInputsProvider + ?Sized> SourceInputsProvider for &T {
    fn source_inputs(&self) -> Result<SourceInputs, BuildModelError> {
        (**self).source_inputs()
    }
}

/// The classified build outputs handed to the image layer builder.
///
/// Every file of a list is placed at `<path on image>/<path relative to its source root>`.
pub trait SourceFilesConfiguration {
    /// Resolved dependency artifacts, sorted by path.
    fn dependencies_files(&self) -> &[PathBuf];

    /// Compiled resource files, in source directory listing order.
    fn resources_files(&self) -> &[PathBuf];

    /// Compiled class files, in source directory listing order.
    fn classes_files(&self) -> &[PathBuf];

    fn dependencies_path_on_image(&self) -> PathBuf {
        LayerKind::Dependencies.path_on_image()
    }

    fn resources_path_on_image(&self) -> PathBuf {
        LayerKind::Resources.path_on_image()
    }

    fn classes_path_on_image(&self) -> PathBuf {
        LayerKind::Classes.path_on_image()
    }

    /// The list backing `kind`.
    fn files(&self, kind: LayerKind) -> &[PathBuf] {
        match kind {
            LayerKind::Dependencies => self.dependencies_files(),
            LayerKind::Resources => self.resources_files(),
            LayerKind::Classes => self.classes_files(),
        }
    }
}
