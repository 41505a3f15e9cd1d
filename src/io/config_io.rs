use std::fs;
use std::path::{Path, PathBuf};

use crate::io::card_io::card_dir;
use crate::model::config::CardConfig;

pub const CONFIG_FILE: &str = "taskcard.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Locate taskcard.toml: next to the card file first, then in `cwd`.
pub fn find_config(card_path: &Path, cwd: &Path) -> Option<PathBuf> {
    [card_dir(card_path), cwd.to_path_buf()]
        .into_iter()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|p| p.is_file())
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<CardConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Config for the card at `card_path`, or defaults when no file exists.
pub fn load_config(card_path: &Path, cwd: &Path) -> Result<CardConfig, ConfigError> {
    match find_config(card_path, cwd) {
        Some(path) => {
            log::debug!("[taskcard.config] using {}", path.display());
            read_config(&path)
        }
        None => Ok(CardConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::locale::Locale;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("card.json"), tmp.path()).unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn config_next_to_card_wins_over_cwd() {
        let card_home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        fs::write(card_home.path().join(CONFIG_FILE), "[card]\nlocale = \"en\"\n").unwrap();
        fs::write(cwd.path().join(CONFIG_FILE), "[card]\nlocale = \"ko\"\n").unwrap();

        let config = load_config(&card_home.path().join("card.json"), cwd.path()).unwrap();
        assert_eq!(config.card.locale, Locale::English);
    }

    #[test]
    fn falls_back_to_cwd_config() {
        let card_home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        fs::write(cwd.path().join(CONFIG_FILE), "[io]\nlock_timeout_ms = 250\n").unwrap();

        let config = load_config(&card_home.path().join("card.json"), cwd.path()).unwrap();
        assert_eq!(config.io.lock_timeout_ms, 250);
        assert_eq!(config.card.locale, Locale::Korean);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[card\nlocale = ").unwrap();
        let err = load_config(&tmp.path().join("card.json"), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[card]\nlocale = \"fr\"\n").unwrap();
        assert!(load_config(&tmp.path().join("card.json"), tmp.path()).is_err());
    }
}
