//! Server rendering of the Leptos app and the hydrate bundle.
use super::WebState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use marketpulse_app::{
    api::{SessionUser, StockLookup},
    shell, App,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::instrument;

/// Context every server render gets, so components look stocks up in-process.
fn render_context(state: &WebState) -> impl Fn() + Clone + Send + Sync + 'static {
    let lookup: Arc<dyn StockLookup> = state.directory.clone();
    let user: SessionUser = state.session_user.clone();
    move || {
        provide_context(lookup.clone());
        provide_context(user.clone());
    }
}

#[instrument(skip(state, req), fields(path = %req.uri().path()))]
async fn render_app(State(state): State<WebState>, req: Request<Body>) -> Response {
    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        render_context(&state),
        move || shell(options.clone()),
    );
    handler(req).await.into_response()
}

pub(crate) fn create_leptos_app(state: &WebState) -> Router<WebState> {
    let options = &state.leptos_options;
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!("./{}/{}", options.site_root, options.site_pkg_dir);
    tracing::info!("Serving pkg dir: {bundle_filepath}");
    let routes = generate_route_list(App);

    Router::new()
        .nest_service(
            &format!("/{}", options.site_pkg_dir),
            ServeDir::new(&bundle_filepath),
        )
        .leptos_routes_with_handler(routes, render_app)
        .fallback(leptos_axum::file_and_error_handler_with_context::<WebState, _>(
            render_context(state),
            shell,
        ))
}
