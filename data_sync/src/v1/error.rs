use crate::v1::db::queries::QueryError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Connection(sqlx::Error),
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::MethodNotAllowed => {
                debug!("method not allowed");
                StatusCode::METHOD_NOT_ALLOWED
            }
            ApiError::Connection(e) => {
                warn!(error = ?e, "failed to open db connection");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Query(e) => {
                warn!(error = ?e, "sql error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ErrorMessage::from((status_code, self.to_string())).into_response()
    }
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, error): (StatusCode, String)) -> Self {
        Self { status_code, error }
    }
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, error): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            error: error.into(),
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
