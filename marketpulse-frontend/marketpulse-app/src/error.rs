use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that reach the UI. Every variant is plain data so it can travel
/// through a serialized resource from the server to the browser.
#[derive(Debug, Error, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum AppError {
    #[error("Request failed {0}")]
    Request(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("JSON {0}")]
    Json(String),
    #[error("Stock lookup failed {0}")]
    Lookup(String),
    #[error("No stock lookup was provided to the renderer")]
    LookupUnavailable,
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self::Lookup(format!("{value:#}"))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Request(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
