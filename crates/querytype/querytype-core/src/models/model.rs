use std::path::{Path, PathBuf};

/// Placeholder for a loaded prediction model.
///
/// Holds no weights. When a model path is configured the placeholder
/// remembers it so a real loader can take over without changing callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    source: Option<PathBuf>,
}

impl Model {
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn from_source(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
