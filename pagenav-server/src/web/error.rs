use std::num::ParseIntError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pagenav::PageError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Invalid page {0:?}: {1}")]
    InvalidPage(String, #[source] ParseIntError),
    #[error("{0}")]
    Page(#[from] PageError),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::InvalidPage(..) => StatusCode::BAD_REQUEST,
            WebError::Page(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        (self.as_status_code(), format!("{self}")).into_response()
    }
}
