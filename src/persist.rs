use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::analysis::AnalysisResult;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create output directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write analysis artifact {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize analysis result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write the result as a pretty-printed JSON artifact named
/// `analysis_<YYYYMMDD_HHMMSS>.json` under `output_dir`, creating the
/// directory if needed, and return the artifact path. Collisions within the
/// same second overwrite (last writer wins). The in-memory result stays valid
/// whether or not this succeeds.
pub fn save_results(result: &AnalysisResult, output_dir: &Path) -> Result<PathBuf, StorageError> {
    // create_dir_all tolerates being raced by a concurrent invocation.
    fs::create_dir_all(output_dir).map_err(|source| StorageError::CreateDir {
        dir: output_dir.to_path_buf(),
        source,
    })?;
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("analysis_{stamp}.json"));
    let json = serde_json::to_string_pretty(result)?;
    fs::write(&path, json).map_err(|source| StorageError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
