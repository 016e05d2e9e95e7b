use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Result, VoltError};

/// Name of the durable snapshot file holding the full card collection
pub const STORE_FILE_NAME: &str = "voltcase_reference_cards.json";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the card snapshot is stored
    pub data_dir: PathBuf,

    /// Directory where export files are written
    pub export_dir: PathBuf,
}

impl Config {
    /// Resolves the platform-specific application-private directories
    pub fn resolve() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "VoltCase", "voltcase").ok_or_else(|| {
            VoltError::ApplicationError {
                message: "Could not determine a data directory for this platform".to_string(),
            }
        })?;

        let data_dir = dirs.data_dir().to_path_buf();

        Ok(Self {
            export_dir: data_dir.join("exports"),
            data_dir,
        })
    }

    /// Builds a configuration rooted at an explicit directory, for embedders
    /// and tests that manage their own storage location
    pub fn for_root(root: &Path) -> Self {
        Self {
            data_dir: root.to_path_buf(),
            export_dir: root.join("exports"),
        }
    }

    /// Full path of the durable snapshot file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}
