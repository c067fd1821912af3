use crate::config::ServerConfig;
use itertools::Itertools;
use marketpulse_api_types::{Stock, StockWithWatchlistStatus};
use marketpulse_app::{api::StockLookup, search::POPULAR_LIMIT};
use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
    path::PathBuf,
};
use sublime_fuzzy::{FuzzySearch, Match, Scoring};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Catalog compiled into the binary, used unless a file is configured.
pub const EMBEDDED_CATALOG: &str = include_str!("../static/stocks.json");

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Unable to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Catalog is not valid json {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} is listed more than once in the catalog")]
    DuplicateSymbol(String),
    #[error("Popular stock {0} is not in the catalog")]
    UnknownPopular(String),
}

fn fuzzy_search(query: &str, target: &str) -> Option<Match> {
    let scoring = Scoring::default();
    let search = FuzzySearch::new(query, target)
        .case_insensitive()
        .score_with(&scoring);
    search.best_match()
}

/// How a catalog entry matched a query. Variants are ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchKind {
    Symbol,
    SymbolPrefix,
    Fuzzy(Reverse<isize>),
}

/// In-memory stock catalog. Immutable once built.
#[derive(Debug)]
pub struct StockDirectory {
    stocks: Vec<Stock>,
    popular: Vec<usize>,
    watchlist: HashSet<String>,
    max_results: usize,
}

impl StockDirectory {
    pub fn new(
        stocks: Vec<Stock>,
        popular: &[String],
        watchlist: &[String],
        max_results: usize,
    ) -> Result<Self, DirectoryError> {
        let mut by_symbol = HashMap::with_capacity(stocks.len());
        for (index, stock) in stocks.iter().enumerate() {
            let symbol = stock.symbol.to_uppercase();
            if by_symbol.insert(symbol.clone(), index).is_some() {
                return Err(DirectoryError::DuplicateSymbol(symbol));
            }
        }
        let popular = if popular.is_empty() {
            (0..stocks.len().min(POPULAR_LIMIT)).collect()
        } else {
            let mut popular = popular
                .iter()
                .map(|symbol| {
                    by_symbol
                        .get(&symbol.to_uppercase())
                        .copied()
                        .ok_or_else(|| DirectoryError::UnknownPopular(symbol.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if popular.len() > POPULAR_LIMIT {
                warn!(
                    "only the first {POPULAR_LIMIT} of {} popular stocks are shown",
                    popular.len()
                );
                popular.truncate(POPULAR_LIMIT);
            }
            popular
        };
        let watchlist: HashSet<String> = watchlist.iter().map(|s| s.to_uppercase()).collect();
        for symbol in watchlist.iter().filter(|s| !by_symbol.contains_key(*s)) {
            warn!("watchlist symbol {symbol} is not in the catalog");
        }
        Ok(Self {
            stocks,
            popular,
            watchlist,
            max_results,
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, DirectoryError> {
        let stocks: Vec<Stock> = match &config.catalog {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&json)?
            }
            None => serde_json::from_str(EMBEDDED_CATALOG)?,
        };
        info!("loaded {} stocks", stocks.len());
        Self::new(
            stocks,
            &config.popular,
            &config.watchlist,
            config.max_results,
        )
    }

    fn with_status(&self, stock: &Stock) -> StockWithWatchlistStatus {
        let in_watchlist = self.watchlist.contains(&stock.symbol.to_uppercase());
        stock.clone().with_watchlist_status(in_watchlist)
    }

    pub fn popular(&self) -> Vec<StockWithWatchlistStatus> {
        self.popular
            .iter()
            .map(|index| self.with_status(&self.stocks[*index]))
            .collect()
    }

    /// Blank queries return the popular list. Otherwise exact symbol
    /// matches come first, then symbol prefixes, then fuzzy matches over
    /// symbol and name.
    #[instrument(skip(self))]
    pub fn search(&self, query: Option<&str>) -> Vec<StockWithWatchlistStatus> {
        let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
            return self.popular();
        };
        let upper = query.to_uppercase();
        self.stocks
            .iter()
            .filter_map(|stock| {
                let symbol = stock.symbol.to_uppercase();
                let kind = if symbol == upper {
                    MatchKind::Symbol
                } else if symbol.starts_with(&upper) {
                    MatchKind::SymbolPrefix
                } else {
                    let target = format!("{} {}", stock.symbol, stock.name);
                    let found = fuzzy_search(query, &target)?;
                    MatchKind::Fuzzy(Reverse(found.score()))
                };
                Some((kind, symbol, stock))
            })
            .sorted_by(|(a_kind, a_symbol, _), (b_kind, b_symbol, _)| {
                a_kind.cmp(b_kind).then_with(|| a_symbol.cmp(b_symbol))
            })
            .take(self.max_results)
            .map(|(_, _, stock)| self.with_status(stock))
            .collect()
    }
}

#[async_trait::async_trait]
impl StockLookup for StockDirectory {
    async fn search(&self, query: Option<&str>) -> anyhow::Result<Vec<StockWithWatchlistStatus>> {
        Ok(StockDirectory::search(self, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(symbol: &str, name: &str) -> Stock {
        Stock {
            symbol: symbol.to_string(),
            name: name.to_string(),
            exchange: "NYSE".to_string(),
            instrument_type: "Common Stock".to_string(),
        }
    }

    fn catalog() -> Vec<Stock> {
        vec![
            stock("MA", "Mastercard"),
            stock("AAPL", "Apple Inc."),
            stock("A", "Agilent Technologies"),
            stock("AA", "Alcoa Corporation"),
        ]
    }

    fn directory(max_results: usize) -> StockDirectory {
        StockDirectory::new(catalog(), &[], &["aapl".to_string()], max_results).unwrap()
    }

    fn symbols(stocks: &[StockWithWatchlistStatus]) -> Vec<&str> {
        stocks.iter().map(|s| s.symbol.as_str()).collect()
    }

    #[test]
    fn exact_then_prefix_then_fuzzy() {
        let found = directory(15).search(Some("a"));
        assert_eq!(symbols(&found)[..3], ["A", "AA", "AAPL"]);
        assert_eq!(found.last().map(|s| s.symbol.as_str()), Some("MA"));
    }

    #[test]
    fn fuzzy_matches_names() {
        let found = directory(15).search(Some(" apple "));
        assert_eq!(symbols(&found), vec!["AAPL"]);
        assert!(directory(15).search(Some("zzz")).is_empty());
    }

    #[test]
    fn results_are_capped() {
        assert_eq!(symbols(&directory(2).search(Some("a"))), vec!["A", "AA"]);
    }

    #[test]
    fn blank_query_is_popular() {
        let directory = directory(15);
        assert_eq!(directory.search(None), directory.popular());
        assert_eq!(directory.search(Some("   ")), directory.popular());
        assert_eq!(symbols(&directory.popular()), vec!["MA", "AAPL", "A", "AA"]);
    }

    #[test]
    fn configured_popular_order() {
        let directory = StockDirectory::new(
            catalog(),
            &["aa".to_string(), "MA".to_string()],
            &[],
            15,
        )
        .unwrap();
        assert_eq!(symbols(&directory.popular()), vec!["AA", "MA"]);
    }

    #[test]
    fn every_popular_symbol_is_checked() {
        let stocks: Vec<Stock> = (0..12).map(|i| stock(&format!("S{i:02}"), "Fund")).collect();
        let mut popular: Vec<String> = stocks.iter().map(|s| s.symbol.clone()).collect();
        let directory = StockDirectory::new(stocks.clone(), &popular, &[], 15).unwrap();
        assert_eq!(directory.popular().len(), POPULAR_LIMIT);

        popular[11] = "S99".to_string();
        assert!(matches!(
            StockDirectory::new(stocks, &popular, &[], 15),
            Err(DirectoryError::UnknownPopular(symbol)) if symbol == "S99"
        ));
    }

    #[test]
    fn watchlist_flags() {
        let found = directory(15).search(Some("a"));
        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .all(|s| s.is_in_watchlist == (s.symbol == "AAPL")));
    }

    #[test]
    fn invalid_catalogs() {
        let mut stocks = catalog();
        stocks.push(stock("aapl", "Apple again"));
        assert!(matches!(
            StockDirectory::new(stocks, &[], &[], 15),
            Err(DirectoryError::DuplicateSymbol(symbol)) if symbol == "AAPL"
        ));
        assert!(matches!(
            StockDirectory::new(catalog(), &["ZZZ".to_string()], &[], 15),
            Err(DirectoryError::UnknownPopular(symbol)) if symbol == "ZZZ"
        ));
    }

    #[test]
    fn embedded_catalog_loads() {
        let directory = StockDirectory::from_config(&ServerConfig::default()).unwrap();
        assert_eq!(directory.popular().len(), POPULAR_LIMIT);
        assert_eq!(directory.search(Some("tsla"))[0].symbol, "TSLA");
    }

    #[test]
    fn missing_catalog_file() {
        let config = ServerConfig {
            catalog: Some(PathBuf::from("/nonexistent/stocks.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(
            StockDirectory::from_config(&config),
            Err(DirectoryError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn lookup_trait_matches_search() {
        let directory = directory(15);
        let lookup: &dyn StockLookup = &directory;
        assert_eq!(
            lookup.search(Some("aapl")).await.unwrap(),
            directory.search(Some("aapl"))
        );
    }
}
