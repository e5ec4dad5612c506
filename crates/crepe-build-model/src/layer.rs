use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Components of the in-image directory holding dependency artifacts.
pub const DEPENDENCIES_PATH_ON_IMAGE: [&str; 2] = ["app", "libs"];
/// Components of the in-image directory holding compiled resources.
pub const RESOURCES_PATH_ON_IMAGE: [&str; 2] = ["app", "resources"];
/// Components of the in-image directory holding compiled classes.
pub const CLASSES_PATH_ON_IMAGE: [&str; 2] = ["app", "classes"];

/// One of the three classified file lists; each becomes its own image layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Dependencies,
    Resources,
    Classes,
}

impl LayerKind {
    /// Layer order, from least to most frequently changing.
    pub const ALL: [LayerKind; 3] = [
        LayerKind::Dependencies,
        LayerKind::Resources,
        LayerKind::Classes,
    ];

    fn components(self) -> [&'static str; 2] {
        match self {
            LayerKind::Dependencies => DEPENDENCIES_PATH_ON_IMAGE,
            LayerKind::Resources => RESOURCES_PATH_ON_IMAGE,
            LayerKind::Classes => CLASSES_PATH_ON_IMAGE,
        }
    }

    /// The fixed directory inside the image that files of this kind are placed under.
    pub fn path_on_image(self) -> PathBuf {
        self.components().iter().collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerKind::Dependencies => "dependencies",
            LayerKind::Resources => "resources",
            LayerKind::Classes => "classes",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of one classified file inside the image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerEntry {
    /// File on the build host.
    pub source: PathBuf,
    /// Destination inside the image, relative to the image root.
    pub path_on_image: PathBuf,
}

impl LayerEntry {
    /// Place `source` at `<kind root>/<relative>`.
    pub fn new(kind: LayerKind, source: impl Into<PathBuf>, relative: &Path) -> Self {
        Self {
            source: source.into(),
            path_on_image: kind.path_on_image().join(relative),
        }
    }
}
