//! Client configuration.
//!
//! Resolves the notes API base URL and the list page size from environment
//! variables. Parsing goes through [`ClientConfig::from_lookup`] so it can be
//! exercised without touching the process environment.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

/// Backend the app talks to when `SUPERTODO_API_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://supertodo-back.onrender.com";

/// Number of notes shown per list page when `SUPERTODO_PAGE_SIZE` is unset.
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration shared by the Fetcher and the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized base URL without trailing slash
    pub api_base_url: String,
    /// Notes per list page
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match non_empty(lookup("SUPERTODO_API_URL")) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let page_size = match non_empty(lookup("SUPERTODO_PAGE_SIZE")) {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_base_url,
            page_size,
        })
    }
}

/// Trim a base URL, strip trailing slashes, and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(ConfigError::Invalid(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(ConfigError::Invalid(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base.to_string())
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::Invalid(format!(
            "SUPERTODO_PAGE_SIZE must be a positive integer, got {raw:?}"
        ))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
