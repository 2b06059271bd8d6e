use inkpress_engine::{DEFAULT_LANGUAGE, Renderer, SanitizePolicy, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Renderer settings. Every key is optional; missing keys keep the
/// engine defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language handed to the highlighter for fences that name none.
    pub default_language: String,
    /// Per-element class overrides.
    pub theme: Theme,
    pub sanitizer: SanitizerConfig,
}

/// Additions to the sanitizer's allow-list. `script` and `iframe` are
/// ignored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    pub extra_allowed_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            theme: Theme::default(),
            sanitizer: SanitizerConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/inkpress");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The sanitization policy: defaults plus `extra_allowed_tags`.
    pub fn policy(&self) -> SanitizePolicy {
        SanitizePolicy::default().with_extra_allowed(&self.sanitizer.extra_allowed_tags)
    }

    /// A renderer built from this configuration.
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.theme.clone())
            .with_policy(self.policy())
            .with_default_language(self.default_language.as_str())
    }
}
