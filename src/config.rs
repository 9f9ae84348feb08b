use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Build-time default location of the trained artifact, relative to the
/// working directory, matching where the repository ships it.
pub const DEFAULT_MODEL_PATH: &str = "models/irrigation_tree.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("IRRIGATION_MODEL_PATH") {
            config.model_path = PathBuf::from(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_shipped_artifact() {
        let config = Config::default();
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }
}
