use marketpulse_api_types::User;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_MAX_RESULTS: usize = 15;

const CATALOG: &str = "MARKETPULSE_CATALOG";
const POPULAR: &str = "MARKETPULSE_POPULAR";
const WATCHLIST: &str = "MARKETPULSE_WATCHLIST";
const MAX_RESULTS: &str = "MARKETPULSE_MAX_RESULTS";
const USER_NAME: &str = "MARKETPULSE_USER_NAME";
const USER_EMAIL: &str = "MARKETPULSE_USER_EMAIL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Settings for the stock directory and the signed in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Catalog file to load instead of the embedded one.
    pub catalog: Option<PathBuf>,
    pub popular: Vec<String>,
    pub watchlist: Vec<String>,
    pub max_results: usize,
    pub user: Option<User>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            popular: Vec::new(),
            watchlist: Vec::new(),
            max_results: DEFAULT_MAX_RESULTS,
            user: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let max_results = match value(MAX_RESULTS) {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or(ConfigError::InvalidNumber {
                    key: MAX_RESULTS,
                    value: raw,
                })?,
            None => DEFAULT_MAX_RESULTS,
        };
        let user = value(USER_NAME).map(|name| User {
            id: "local".to_string(),
            name,
            email: value(USER_EMAIL).unwrap_or_default(),
        });
        Ok(Self {
            catalog: value(CATALOG).map(PathBuf::from),
            popular: symbol_list(value(POPULAR)),
            watchlist: symbol_list(value(WATCHLIST)),
            max_results,
            user,
        })
    }
}

fn symbol_list(raw: Option<String>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(|symbol| symbol.trim().to_uppercase())
            .filter(|symbol| !symbol.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
