//! Where the document file lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_file() -> PathBuf {
    PathBuf::from("data").join("classpilot.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON document. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_data_dir() {
        let config = StorageConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data/classpilot.json"));
    }
}
