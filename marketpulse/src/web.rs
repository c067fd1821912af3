pub mod api;
pub mod error;
mod leptos_app;

use crate::directory::StockDirectory;
use axum::{extract::FromRef, routing::get, Router};
use leptos::config::LeptosOptions;
use marketpulse_app::api::SessionUser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone, FromRef)]
pub(crate) struct WebState {
    pub(crate) leptos_options: LeptosOptions,
    pub(crate) directory: Arc<StockDirectory>,
    pub(crate) session_user: SessionUser,
}

fn router(state: WebState) -> Router {
    Router::new()
        .route("/api/v1/stocks/search", get(api::search_stocks))
        .route("/api/v1/current_user", get(api::current_user))
        .merge(leptos_app::create_leptos_app(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState) -> anyhow::Result<()> {
    let addr = state.leptos_options.site_addr;
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use marketpulse_api_types::StockWithWatchlistStatus;
    use tower::ServiceExt;

    fn state() -> WebState {
        WebState {
            leptos_options: LeptosOptions::builder().output_name("marketpulse").build(),
            directory: Arc::new(StockDirectory::from_config(&ServerConfig::default()).unwrap()),
            session_user: SessionUser::default(),
        }
    }

    async fn get_body(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router(state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn api_routes_beside_the_app() {
        let (status, body) = get_body("/api/v1/current_user").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"null");

        let (status, body) = get_body("/api/v1/stocks/search?q=tsla").await;
        assert_eq!(status, StatusCode::OK);
        let stocks: Vec<StockWithWatchlistStatus> = serde_json::from_slice(&body).unwrap();
        assert_eq!(stocks[0].symbol, "TSLA");

        let long = "a".repeat(api::MAX_QUERY_CHARS + 1);
        let (status, _) = get_body(&format!("/api/v1/stocks/search?q={long}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
