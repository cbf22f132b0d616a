//! Scene configuration loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use tankdrive_sim::SceneConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse scene config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the scene config, or the defaults when no path is given.
///
/// Fields missing from the file keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<SceneConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
