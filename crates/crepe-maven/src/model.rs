use std::fmt;
use std::path::PathBuf;

use crepe_build_model::{BuildModelError, SourceInputs, SourceInputsProvider};
use serde::{Deserialize, Serialize};

/// Maven coordinates plus the resolved file, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Set once the artifact has been resolved into the local repository.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            file: None,
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// `groupId:artifactId:version`
    pub fn coordinates(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A `<resource>` entry of the project build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub directory: PathBuf,
}

impl Resource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// The parts of `<build>` that locate sources and compiled outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenBuild {
    pub output_directory: PathBuf,
    pub source_directory: PathBuf,
}

impl MavenBuild {
    /// Standard Maven layout under `basedir`.
    pub fn standard(basedir: impl Into<PathBuf>) -> Self {
        let basedir = basedir.into();
        Self {
            output_directory: basedir.join("target").join("classes"),
            source_directory: basedir.join("src").join("main").join("java"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenProject {
    #[serde(default)]
    pub artifact_id: Option<String>,
    pub build: MavenBuild,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Resolved runtime artifacts of the project.
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl MavenProject {
    pub fn new(build: MavenBuild) -> Self {
        Self {
            artifact_id: None,
            build,
            resources: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    /// A project using the standard directory layout, with `src/main/resources`
    /// as its only resource directory.
    pub fn standard(basedir: impl Into<PathBuf>) -> Self {
        let basedir = basedir.into();
        let resources = basedir.join("src").join("main").join("resources");
        let mut project = Self::new(MavenBuild::standard(basedir));
        project.resources.push(Resource::new(resources));
        project
    }

    pub(crate) fn display_name(&self) -> &str {
        self.artifact_id.as_deref().unwrap_or("<unnamed>")
    }

    pub fn to_source_inputs(&self) -> Result<SourceInputs, BuildModelError> {
        let dependency_paths = self
            .artifacts
            .iter()
            .map(|artifact| {
                artifact
                    .file
                    .clone()
                    .ok_or_else(|| BuildModelError::ArtifactWithoutFile {
                        coordinates: artifact.coordinates(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SourceInputs {
            output_dir: self.build.output_directory.clone(),
            resource_dirs: self
                .resources
                .iter()
                .map(|resource| resource.directory.clone())
                .collect(),
            classes_dir: self.build.source_directory.clone(),
            dependency_paths,
        })
    }
}

impl SourceInputsProvider for MavenProject {
    fn source_inputs(&self) -> Result<SourceInputs, BuildModelError> {
        self.to_source_inputs()
    }
}
