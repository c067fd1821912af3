use crate::error::AppResult;
use marketpulse_api_types::{search::StockSearchQuery, StockWithWatchlistStatus, User};

pub(crate) const SEARCH_PATH: &str = "/api/v1/stocks/search";
#[cfg_attr(feature = "ssr", allow(dead_code))]
pub(crate) const CURRENT_USER_PATH: &str = "/api/v1/current_user";

/// Looks stocks up by symbol or name. No query (or a blank one) returns the
/// popular list.
pub async fn search_stocks(query: Option<String>) -> AppResult<Vec<StockWithWatchlistStatus>> {
    let query = StockSearchQuery::new(query.as_deref());
    #[cfg(feature = "ssr")]
    {
        use leptos::prelude::use_context;
        use std::sync::Arc;

        let lookup = use_context::<Arc<dyn StockLookup>>()
            .ok_or(crate::error::AppError::LookupUnavailable)?;
        Ok(lookup.search(query.term()).await?)
    }
    #[cfg(not(feature = "ssr"))]
    {
        fetch_api(&search_url(&query)).await
    }
}

/// The signed in user, if the server knows one.
pub async fn get_current_user() -> AppResult<Option<User>> {
    #[cfg(feature = "ssr")]
    {
        use leptos::prelude::use_context;
        Ok(use_context::<SessionUser>().and_then(|user| user.0))
    }
    #[cfg(not(feature = "ssr"))]
    {
        fetch_api(CURRENT_USER_PATH).await
    }
}

#[cfg_attr(feature = "ssr", allow(dead_code))]
pub(crate) fn search_url(query: &StockSearchQuery) -> String {
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

    match query.term() {
        Some(term) => format!(
            "{SEARCH_PATH}?q={}",
            utf8_percent_encode(term, NON_ALPHANUMERIC)
        ),
        None => SEARCH_PATH.to_string(),
    }
}

#[cfg(not(feature = "ssr"))]
pub async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    // gloo futures are !Send, resources need Send futures
    send_wrapper::SendWrapper::new(fetch_json(path.to_string())).await
}

#[cfg(not(feature = "ssr"))]
async fn fetch_json<T>(path: String) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    use crate::error::AppError;

    let response = gloo_net::http::Request::get(&path).send().await?;
    if !response.ok() {
        log::error!("{path} returned {}", response.status());
        return Err(AppError::Status(response.status()));
    }
    let json = response.text().await?;
    serde_json::from_str(&json).map_err(|e| {
        log::error!("{e} {path} returned: json text {json}");
        AppError::from(e)
    })
}

/// Answers stock searches in-process while rendering on the server.
#[cfg(feature = "ssr")]
#[async_trait::async_trait]
pub trait StockLookup: Send + Sync {
    async fn search(&self, query: Option<&str>) -> anyhow::Result<Vec<StockWithWatchlistStatus>>;
}

/// The user the server resolved for the current request.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUser(pub Option<User>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_the_term() {
        assert_eq!(search_url(&StockSearchQuery::new(None)), SEARCH_PATH);
        assert_eq!(search_url(&StockSearchQuery::new(Some("  "))), SEARCH_PATH);
        assert_eq!(
            search_url(&StockSearchQuery::new(Some(" brk.b & co "))),
            "/api/v1/stocks/search?q=brk%2Eb%20%26%20co"
        );
    }

    #[cfg(feature = "ssr")]
    mod ssr {
        use super::super::*;
        use crate::error::AppError;
        use leptos::reactive::owner::{provide_context, Owner};
        use std::sync::Arc;

        struct Fixed;

        #[async_trait::async_trait]
        impl StockLookup for Fixed {
            async fn search(
                &self,
                query: Option<&str>,
            ) -> anyhow::Result<Vec<StockWithWatchlistStatus>> {
                match query {
                    Some("boom") => anyhow::bail!("catalog offline"),
                    Some(term) => Ok(vec![StockWithWatchlistStatus {
                        symbol: term.to_uppercase(),
                        name: "Found".to_string(),
                        exchange: "NYSE".to_string(),
                        instrument_type: "Common Stock".to_string(),
                        is_in_watchlist: false,
                    }]),
                    None => Ok(Vec::new()),
                }
            }
        }

        fn block_on<F: std::future::Future>(future: F) -> F::Output {
            futures::executor::block_on(future)
        }

        #[test]
        fn search_uses_the_provided_lookup() {
            let owner = Owner::new();
            owner.with(|| {
                let lookup: Arc<dyn StockLookup> = Arc::new(Fixed);
                provide_context(lookup);
                let found = block_on(search_stocks(Some(" ibm ".to_string()))).unwrap();
                assert_eq!(found[0].symbol, "IBM");
                assert!(block_on(search_stocks(None)).unwrap().is_empty());
                assert!(matches!(
                    block_on(search_stocks(Some("boom".to_string()))),
                    Err(AppError::Lookup(_))
                ));
            });
        }

        #[test]
        fn missing_context_is_an_error() {
            let owner = Owner::new();
            owner.with(|| {
                assert_eq!(
                    block_on(search_stocks(Some("ibm".to_string()))),
                    Err(AppError::LookupUnavailable)
                );
                assert_eq!(block_on(get_current_user()), Ok(None));
            });
        }
    }
}
