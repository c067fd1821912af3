use super::error::ApiError;
use crate::directory::StockDirectory;
use axum::{
    extract::{Query, State},
    Json,
};
use marketpulse_api_types::{search::StockSearchQuery, StockWithWatchlistStatus, User};
use marketpulse_app::api::SessionUser;
use std::sync::Arc;
use tracing::instrument;

pub(crate) const MAX_QUERY_CHARS: usize = 100;

#[instrument(skip(directory))]
pub(crate) async fn search_stocks(
    State(directory): State<Arc<StockDirectory>>,
    Query(query): Query<StockSearchQuery>,
) -> Result<Json<Vec<StockWithWatchlistStatus>>, ApiError> {
    let term = query.term();
    if let Some(len) = term.map(|t| t.chars().count()).filter(|len| *len > MAX_QUERY_CHARS) {
        return Err(ApiError::QueryTooLong(len));
    }
    Ok(Json(directory.search(term)))
}

pub(crate) async fn current_user(State(user): State<SessionUser>) -> Json<Option<User>> {
    Json(user.0)
}
