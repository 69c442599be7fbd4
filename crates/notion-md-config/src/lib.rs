use notion_md_engine::MAX_DEPTH;
use notion_md_engine::io::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_NOTION_VERSION, DEFAULT_PAGE_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the Notion integration token.
pub const TOKEN_ENV_VAR: &str = "NOTION_TOKEN";

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

    #[error("NOTION_TOKEN environment variable not set")]
    MissingToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback token when the environment variable is unset. May contain `$VAR` or `~`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub max_depth: usize,
    pub api_base_url: String,
    pub notion_version: String,
    pub page_size: u32,
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            max_depth: MAX_DEPTH,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
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

    /// Load the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/notion-md");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Pick the API token: the environment value wins over the config file.
    ///
    /// Empty values count as unset.
    pub fn resolve_token(&self, env_value: Option<String>) -> Result<String, ConfigError> {
        if let Some(token) = env_value.filter(|t| !t.trim().is_empty()) {
            return Ok(token);
        }

        self.token
            .as_deref()
            .map(Self::expand_token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    fn expand_token(raw: &str) -> String {
        match shellexpand::full(raw) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => raw.to_string(),
        }
    }
}
