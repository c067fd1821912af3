use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketpulse_api_types::result::JsonError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Search text is too long ({0} characters, at most {max} allowed)", max = super::api::MAX_QUERY_CHARS)]
    QueryTooLong(usize),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::QueryTooLong(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}
