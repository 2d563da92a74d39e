use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "bias-viewer.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Artifact locations
// ---------------------------------------------------------------------------

/// Where every artifact lives. Relative paths resolve against `artifact_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub artifact_dir: PathBuf,
    pub crows_pairs: PathBuf,
    pub stereoset: PathBuf,
    pub table1: PathBuf,
    pub table2: PathBuf,
    pub table3: PathBuf,
    pub crows_pairs_heatmap: PathBuf,
    pub stereoset_heatmap: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("."),
            crows_pairs: "crows_pairs_anonymized.csv".into(),
            stereoset: "stereo.csv".into(),
            table1: "table1.csv".into(),
            table2: "table2.csv".into(),
            table3: "table3.csv".into(),
            crows_pairs_heatmap: "image1.png".into(),
            stereoset_heatmap: "image2.png".into(),
        }
    }
}

impl ViewerConfig {
    /// Read a config file. Missing keys take their default.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `bias-viewer.json` from `dir` when present, defaults otherwise.
    /// A broken file is logged and ignored.
    pub fn load_or_default(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(cfg) => {
                log::info!("Using configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring configuration: {e}");
                Self::default()
            }
        }
    }

    /// Resolve an artifact path against `artifact_dir`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.artifact_dir.join(path)
        }
    }
}
