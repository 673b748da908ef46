//! Local seed dataset.

use roster_engine::User;
use std::path::{Path, PathBuf};

/// Seed records compiled into the binary.
const BUNDLED_SEED: &str = include_str!("../data/users.json");

/// Errors loading seed records.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load seed records from `path`, or the bundled set when no path is given.
pub fn load(path: Option<&Path>) -> Result<Vec<User>, SeedError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(serde_json::from_str(BUNDLED_SEED)?),
    }
}
