use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::{ensure_dir, write_atomic};

const APP_DIR: &str = "fintrack";
const CONFIG_FILE: &str = "config.json";
const TRANSACTIONS_FILE: &str = "tranzactii.csv";
const ACCOUNTS_FILE: &str = "conturi.json";

/// User-facing settings persisted under the platform data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "RON".into(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Directory holding the transaction log and the account file.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_base_dir)
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.resolve_data_dir().join(TRANSACTIONS_FILE)
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.resolve_data_dir().join(ACCOUNTS_FILE)
    }
}

fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Loads and saves the settings file, creating the base directory on first
/// use.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_loads_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency, "RON");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn config_round_trips_through_save_and_load() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            currency: "EUR".into(),
            data_dir: Some(temp.path().join("data")),
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.data_dir, Some(temp.path().join("data")));
        assert_eq!(
            loaded.transactions_path(),
            temp.path().join("data").join("tranzactii.csv")
        );
        assert_eq!(
            loaded.accounts_path(),
            temp.path().join("data").join("conturi.json")
        );
    }
}
