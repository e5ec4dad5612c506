//! Classification of a project's compiled outputs into image layer file lists.
//!
//! The resolver never decides how sources map to outputs; the compiler already did
//! that. It lists each source directory (one level deep), looks for the same relative
//! path under the compiled-output directory, and keeps whatever is actually there.
//! Source files that were filtered out of the build are skipped silently.
//!
//! Files nested inside a source subdirectory are not discovered individually; the
//! subdirectory itself is kept when it exists in the output. Nothing checks whether the
//! output directory holds extra files no source directory accounts for.

use std::fs;
use std::path::{Path, PathBuf};

use crepe_build_model::{
    BuildModelError, LayerEntry, LayerKind, SourceFilesConfiguration, SourceInputs,
    SourceInputsProvider,
};
use serde::Serialize;

const LOG_TARGET: &str = "crepe.source_files";

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Inputs(#[from] BuildModelError),

    #[error("{kind} file {path} is not located under its source root")]
    OutsideRoot { kind: LayerKind, path: PathBuf },
}

/// Build outputs classified into dependencies, resources and classes.
///
/// All lists are materialized on construction; reading them never touches the
/// filesystem again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSourceFiles {
    output_dir: PathBuf,
    dependencies_files: Vec<PathBuf>,
    resources_files: Vec<PathBuf>,
    classes_files: Vec<PathBuf>,
}

impl ResolvedSourceFiles {
    /// Classify the build outputs described by `inputs`.
    ///
    /// Fails if any source directory cannot be listed; no partial result is returned.
    pub fn resolve(inputs: &SourceInputs) -> Result<Self, ResolveError> {
        // Byte order of the whole path, not `Path`'s component-wise `Ord`.
        let mut dependencies_files = inputs.dependency_paths.clone();
        dependencies_files.sort_by(|a, b| {
            a.as_os_str()
                .as_encoded_bytes()
                .cmp(b.as_os_str().as_encoded_bytes())
        });

        let mut resources_files = Vec::new();
        for resource_dir in &inputs.resource_dirs {
            collect_compiled(resource_dir, &inputs.output_dir, &mut resources_files)?;
        }

        let mut classes_files = Vec::new();
        collect_compiled(&inputs.classes_dir, &inputs.output_dir, &mut classes_files)?;

        tracing::debug!(
            target: LOG_TARGET,
            output_dir = %inputs.output_dir.display(),
            dependencies = dependencies_files.len(),
            resources = resources_files.len(),
            classes = classes_files.len(),
            "resolved source files"
        );

        Ok(Self {
            output_dir: inputs.output_dir.clone(),
            dependencies_files,
            resources_files,
            classes_files,
        })
    }

    /// Gather inputs from a build-tool integration and resolve them.
    pub fn from_provider<P>(provider: &P) -> Result<Self, ResolveError>
    where
        P: SourceInputsProvider + ?Sized,
    {
        let inputs = provider.source_inputs()?;
        Self::resolve(&inputs)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Pair every file of `kind` with its destination inside the image.
    ///
    /// Dependencies land directly under their root by file name. Resources and classes
    /// keep their path relative to the output directory, which mirrors their source root.
    pub fn layer_entries(&self, kind: LayerKind) -> Result<Vec<LayerEntry>, ResolveError> {
        self.files(kind)
            .iter()
            .map(|path| {
                let relative = match kind {
                    LayerKind::Dependencies => path.file_name().map(Path::new),
                    LayerKind::Resources | LayerKind::Classes => {
                        path.strip_prefix(&self.output_dir).ok()
                    }
                };
                match relative {
                    Some(relative) if !relative.as_os_str().is_empty() => {
                        Ok(LayerEntry::new(kind, path.clone(), relative))
                    }
                    _ => Err(ResolveError::OutsideRoot {
                        kind,
                        path: path.clone(),
                    }),
                }
            })
            .collect()
    }
}

impl SourceFilesConfiguration for ResolvedSourceFiles {
    fn dependencies_files(&self) -> &[PathBuf] {
        &self.dependencies_files
    }

    fn resources_files(&self) -> &[PathBuf] {
        &self.resources_files
    }

    fn classes_files(&self) -> &[PathBuf] {
        &self.classes_files
    }
}

/// Append the output counterpart of every direct entry of `source_dir` that exists.
fn collect_compiled(
    source_dir: &Path,
    output_dir: &Path,
    out: &mut Vec<PathBuf>,
) -> Result<(), ResolveError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ResolveError::Io { path, source }
    };

    tracing::debug!(
        target: LOG_TARGET,
        source_dir = %source_dir.display(),
        "listing source directory"
    );

    for entry in fs::read_dir(source_dir).map_err(io_err(source_dir))? {
        let entry = entry.map_err(io_err(source_dir))?;
        let candidate = output_dir.join(entry.file_name());

        if candidate.try_exists().map_err(io_err(&candidate))? {
            out.push(candidate);
        } else {
            tracing::debug!(
                target: LOG_TARGET,
                source = %entry.path().display(),
                "no compiled output; skipping"
            );
        }
    }

    Ok(())
}
