use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::reply::{ReplyPolicy, DEFAULT_REPLY_DELAY};

/// User settings, stored as JSON under the platform config directory.
///
/// Every field is optional so a hand-written file only needs the settings it
/// changes. Command-line flags override whatever is here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_policy: Option<ReplyPolicy>,
    /// Speech-to-text program and its arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_command: Option<Vec<String>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Record `language` as the default for the next run, keeping other settings.
    pub fn save_language(path: &Path, language: Language) -> Result<()> {
        let mut config = Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable config, rewriting");
            Self::new()
        });
        config.language = Some(language);
        config.save_to(path)
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY)
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

        Ok(config_dir.join("soilsense").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(config.reply_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_file_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "ta", "reply_policy": "suppress-when-closed" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language, Some(Language::Ta));
        assert_eq!(config.reply_policy, Some(ReplyPolicy::SuppressWhenClosed));
        assert_eq!(config.voice_command, None);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "fr" }"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_save_language_keeps_other_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            reply_delay_ms: Some(250),
            voice_command: Some(vec!["listen".to_string(), "{locale}".to_string()]),
            ..Config::new()
        };
        config.save_to(&path).unwrap();

        Config::save_language(&path, Language::Kn).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.language, Some(Language::Kn));
        assert_eq!(reloaded.reply_delay(), Duration::from_millis(250));
        assert_eq!(reloaded.voice_command, config.voice_command);
    }
}
