use serde::{Deserialize, Serialize};

/// A catalog entry as known to the stock directory.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub instrument_type: String,
}

impl Stock {
    pub fn with_watchlist_status(self, is_in_watchlist: bool) -> StockWithWatchlistStatus {
        let Stock {
            symbol,
            name,
            exchange,
            instrument_type,
        } = self;
        StockWithWatchlistStatus {
            symbol,
            name,
            exchange,
            instrument_type,
            is_in_watchlist,
        }
    }
}

/// Stock record handed to the UI. The symbol is the unique key.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StockWithWatchlistStatus {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub instrument_type: String,
    pub is_in_watchlist: bool,
}

impl StockWithWatchlistStatus {
    /// Path of the per-symbol page.
    pub fn href(&self) -> String {
        format!("/stocks/{}", self.symbol)
    }

    /// `SYMBOL | EXCHANGE | TYPE` line shown under the name.
    pub fn subtitle(&self) -> String {
        format!("{} | {} | {}", self.symbol, self.exchange, self.instrument_type)
    }
}
