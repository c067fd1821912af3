use serde::{Deserialize, Serialize};

/// Body of every failed API response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonError {
    pub error_message: String,
}
