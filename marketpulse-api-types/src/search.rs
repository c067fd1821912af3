use serde::{Deserialize, Serialize};

/// Query string of `GET /api/v1/stocks/search`.
///
/// A missing or blank `q` asks for the popular list.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq, Clone)]
pub struct StockSearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl StockSearchQuery {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            q: query.map(str::to_string),
        }
    }

    /// The trimmed query, or `None` when nothing meaningful was typed.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}
