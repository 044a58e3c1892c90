//! Handoff configuration
//!
//! Hosting apps can override the store link prefixes, how long notices stay
//! on screen and the preferred languages. Everything defaults to the
//! production values.

use app_platform::NoticeLength;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// In-store deep link prefix
pub const PLAY_STORE_MARKET_LINK: &str = "market://details?id=";

/// Web store link prefix
pub const PLAY_STORE_LINK: &str = "https://play.google.com/store/apps/details?id=";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for [`EcosystemManager`](super::EcosystemManager)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EcosystemConfig {
    /// Prefix of the in-store deep link, followed by the package id
    pub store_market_link: String,
    /// Prefix of the web store link, followed by the package id
    pub store_web_link: String,
    /// Display length of notices
    pub notice_length: NoticeLength,
    /// Preferred language tags, most preferred first
    pub locale: Vec<String>,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            store_market_link: PLAY_STORE_MARKET_LINK.to_string(),
            store_web_link: PLAY_STORE_LINK.to_string(),
            notice_length: NoticeLength::Long,
            locale: Vec::new(),
        }
    }
}

impl EcosystemConfig {
    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EcosystemConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded ecosystem config from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// Check that store links can take a package id
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.store_market_link.contains(':') {
            return Err(ConfigError::Invalid(format!(
                "storeMarketLink has no scheme: {}",
                self.store_market_link
            )));
        }
        if !self.store_web_link.starts_with("https://") && !self.store_web_link.starts_with("http://") {
            return Err(ConfigError::Invalid(format!(
                "storeWebLink is not an http(s) link: {}",
                self.store_web_link
            )));
        }
        Ok(())
    }

    /// Requested language tags as string slices
    pub fn locale_tags(&self) -> Vec<&str> {
        self.locale.iter().map(String::as_str).collect()
    }

    /// In-store link for a package
    pub fn market_link(&self, package: &str) -> String {
        format!("{}{}", self.store_market_link, urlencoding::encode(package))
    }

    /// Web store link for a package
    pub fn web_link(&self, package: &str) -> String {
        format!("{}{}", self.store_web_link, urlencoding::encode(package))
    }
}
