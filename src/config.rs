use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::options::Selection;

/// Settings read from `mst.toml`. Command-line options override them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MstConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: Selection,
    #[serde(default = "default_record_steps")]
    pub record_steps: bool,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            record_steps: default_record_steps(),
            output: default_output(),
        }
    }
}

impl MstConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: MstConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_algorithm() -> Selection {
    Selection::Single(crate::mst::Algorithm::Kruskal)
}

fn default_record_steps() -> bool {
    true
}

fn default_output() -> String {
    "mst-report.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::Algorithm;

    #[test]
    fn missing_file_gives_defaults() {
        let config = MstConfig::load_from_file("does/not/exist/mst.toml").unwrap();
        assert_eq!(config, MstConfig::default());
        assert_eq!(config.algorithm, Selection::Single(Algorithm::Kruskal));
        assert!(config.record_steps);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: MstConfig = toml::from_str("algorithm = \"all\"\n").unwrap();
        assert_eq!(config.algorithm, Selection::All);
        assert_eq!(config.output, "mst-report.json");

        let config: MstConfig =
            toml::from_str("algorithm = \"prim\"\nrecord_steps = false\n").unwrap();
        assert_eq!(config.algorithm, Selection::Single(Algorithm::Prim));
        assert!(!config.record_steps);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(toml::from_str::<MstConfig>("algorithm = \"dijkstra\"").is_err());
    }
}
