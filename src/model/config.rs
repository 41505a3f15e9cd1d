use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// Configuration from taskcard.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub card: CardSection,
    #[serde(default)]
    pub io: IoConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSection {
    /// Copy used when seeding and rendering a card
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoConfig {
    /// How long a writer waits for the card lock, in milliseconds
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

impl Default for IoConfig {
    fn default() -> Self {
        IoConfig {
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

fn default_lock_timeout_ms() -> u64 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: CardConfig = toml::from_str("").unwrap();
        assert_eq!(config.card.locale, Locale::Korean);
        assert_eq!(config.io.lock_timeout_ms, 5000);
    }

    #[test]
    fn partial_config() {
        let config: CardConfig = toml::from_str("[card]\nlocale = \"en\"\n").unwrap();
        assert_eq!(config.card.locale, Locale::English);
        assert_eq!(config.io.lock_timeout_ms, 5000);
    }
}
