//! Spec-file loading
//!
//! Loads a test plan from a YAML or JSON specification file. The format
//! is chosen by file extension. Every failure here is fatal for the run
//! and is reported before any test executes; a missing file, an
//! unsupported extension, and a malformed document are distinguishable.

use std::path::{Path, PathBuf};

use restcheck_domain::TestPlan;
use thiserror::Error;
use tokio::fs;

/// Errors raised while loading a specification file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The spec file does not exist.
    #[error("spec file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension maps to no known format.
    #[error("unsupported spec format \"{0}\" (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not a valid test plan.
    #[error("malformed spec {}: {message}", .path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// Loads a test plan from the given path.
///
/// # Errors
///
/// Returns a [`LoadError`] when the file is missing, its extension is not
/// `.yaml`/`.yml`/`.json`, it cannot be read, or it does not deserialize
/// into a [`TestPlan`].
pub async fn load_plan(path: &Path) -> Result<TestPlan, LoadError> {
    if fs::metadata(path).await.is_err() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let content = fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), format = %extension, "loading test plan");

    let plan = match extension.as_str() {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        "json" => serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        other => return Err(LoadError::UnsupportedFormat(format!(".{other}"))),
    };

    Ok(plan)
}
