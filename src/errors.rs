use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything an item operation can be rejected with.
///
/// All variants are client errors: they are local to one request and
/// never affect the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("no such item: {0:?}")]
    NotFound(String),

    #[error("item already exists: {0:?}")]
    AlreadyExists(String),

    #[error("missing parameter: {0:?}")]
    MissingParameter(&'static str),
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::InvalidPrice(_) | StoreError::MissingParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), error = %self, "request rejected");
        (self.status(), format!("{self}\n")).into_response()
    }
}
