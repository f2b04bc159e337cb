use crate::error::{CairnError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cairn, stored as config.json in the platform
/// config directory. Everything is optional; defaults apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalConfig {
    /// Store root override. When unset the platform data directory is
    /// used (and the CAIRN_DATA_DIR environment variable wins over both).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl JournalConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CairnError::Io)?;
        let config: JournalConfig =
            serde_json::from_str(&content).map_err(CairnError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CairnError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CairnError::Serialization)?;
        fs::write(config_path, content).map_err(CairnError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = JournalConfig::load(dir.path().join("nothing-here")).unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = JournalConfig {
            data_dir: Some(PathBuf::from("/tmp/climbs")),
        };
        config.save(dir.path()).unwrap();

        let loaded = JournalConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_dir": null, "future_option": true}"#,
        )
        .unwrap();

        let config = JournalConfig::load(dir.path()).unwrap();
        assert_eq!(config, JournalConfig::default());
    }
}
