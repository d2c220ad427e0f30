use crate::model::interface::ModelError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("missing form field {0:?}")]
    MissingField(&'static str),
    #[error("failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
    #[error("classification failed: {0}")]
    Model(#[from] ModelError),
    #[error("classification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Multipart(e) => e.status(),
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Model(_) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
