use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// One variant per pipeline stage, so the failing stage is readable
/// straight off the logged error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Extraction(String),
    #[error("{0}")]
    Completion(String),
    #[error("{0}")]
    Normalization(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(reason) => {
                tracing::warn!("request rejected: {}", reason);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
            }
            err => {
                tracing::error!("analysis failed: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Analysis failed", "details": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
