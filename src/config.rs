mod topology_config;

pub use topology_config::{SeededTopology, TopologyConfig};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("config {} has no .yaml, .yml or .ron extension", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid config pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("could not list config: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Loads a topology config, choosing YAML or RON by the file extension.
pub fn load_config(path: &Path) -> Result<TopologyConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let parsed = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        "ron" => ron::de::from_str(&text).map_err(|e| e.to_string()),
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    parsed.map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Returns all files matching the glob pattern in lexical order.
pub fn config_paths(pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry?);
    }

    Ok(paths)
}
