//! Configuration management for linkmatch
//!
//! All configuration is loaded from `./config/linkmatch.toml`.
//! No hardcoded defaults exist in source code - all defaults are in the config template.

use scraper::Selector;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file path relative to working directory
pub const CONFIG_PATH: &str = "./config/linkmatch.toml";

/// Default configuration file content - this is the ONLY place defaults exist
pub const DEFAULT_CONFIG: &str = include_str!("../config/linkmatch.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid URL in '{field}': {url}")]
    InvalidUrl { field: String, url: String },

    #[error("Invalid CSS selector in '{field}': {selector}")]
    InvalidSelector { field: String, selector: String },

    #[error("Configuration field '{field}' cannot be empty")]
    EmptyRequired { field: String },

    #[error("Configuration field '{field}' must be greater than zero")]
    ZeroRequired { field: String },
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub parsing: ParsingConfig,
    pub scoring: ScoringConfig,
}

/// Harvester configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Query URL prefix; the escaped company name is appended verbatim
    pub engine_url: String,
    /// Fixed wall-clock delay after navigation before the page is read (seconds)
    pub page_delay_secs: u64,
    /// CSS selector matching result anchors on the rendered page
    pub result_selector: String,
}

/// URL-list cell parsing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    /// Quote-split fragments shorter than this many bytes are discarded
    pub min_fragment_len: usize,
}

/// Scorer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Emit a progress line every this many firm rows
    pub progress_interval: usize,
}

impl AppConfig {
    /// Load configuration from the default path
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(Path::new(CONFIG_PATH))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.engine_url.is_empty() {
            return Err(ConfigError::EmptyRequired {
                field: "search.engine_url".to_string(),
            });
        }
        if !self.search.engine_url.starts_with("http://")
            && !self.search.engine_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidUrl {
                field: "search.engine_url".to_string(),
                url: self.search.engine_url.clone(),
            });
        }

        if Selector::parse(&self.search.result_selector).is_err() {
            return Err(ConfigError::InvalidSelector {
                field: "search.result_selector".to_string(),
                selector: self.search.result_selector.clone(),
            });
        }

        if self.parsing.min_fragment_len == 0 {
            return Err(ConfigError::ZeroRequired {
                field: "parsing.min_fragment_len".to_string(),
            });
        }

        if self.scoring.progress_interval == 0 {
            return Err(ConfigError::ZeroRequired {
                field: "scoring.progress_interval".to_string(),
            });
        }

        Ok(())
    }

    /// Create default configuration file at the standard location
    pub fn create_default_config() -> Result<PathBuf, ConfigError> {
        let path = Path::new(CONFIG_PATH);

        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(DEFAULT_CONFIG.as_bytes())?;

        Ok(path.to_path_buf())
    }

    /// Check if stdin is a TTY (interactive terminal)
    pub fn is_interactive() -> bool {
        atty::is(atty::Stream::Stdin)
    }

    /// Prompt user to create default config (only in interactive mode)
    pub fn prompt_create_config() -> Result<Option<PathBuf>, ConfigError> {
        if !Self::is_interactive() {
            return Ok(None);
        }

        print!("Configuration file not found. Create default config? [Y/n] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();

        if input.is_empty() || input == "y" || input == "yes" {
            let path = Self::create_default_config()?;
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }
}
