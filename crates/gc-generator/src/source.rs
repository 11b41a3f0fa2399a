use std::fmt;
use std::path::{Path, PathBuf};

/// Where the classification model comes from. Decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    Local(PathBuf),
    Hub(String),
}

impl ModelSource {
    /// Prefer an on-disk model directory, else the hub identifier. A local directory
    /// is made absolute so the serving process need not share our working directory.
    pub fn resolve(local_dir: &Path, model_id: &str) -> Self {
        if local_dir.is_dir() {
            let path = std::fs::canonicalize(local_dir).unwrap_or_else(|_| local_dir.to_path_buf());
            tracing::info!(path = %path.display(), "loading model from local directory");
            Self::Local(path)
        } else {
            tracing::info!(path = %local_dir.display(), model_id, "local model not found, using hub model");
            Self::Hub(model_id.to_string())
        }
    }

    /// Name passed as `model` to the serving backend.
    pub fn model_name(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Hub(id) => id.clone(),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "local:{}", path.display()),
            Self::Hub(id) => write!(f, "hub:{id}"),
        }
    }
}
