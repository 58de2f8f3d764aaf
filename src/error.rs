//! Errors surfaced to HTTP clients.

use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("content-type header must be 'application/json'")]
    UnsupportedMediaType,

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("not found")]
    NotFound,

    #[error("401 - unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Internal(e) => log::error!("request failed: {e}"),
            ApiError::NotFound => log::debug!("not found"),
            other => log::debug!("rejected request: {other}"),
        }

        let mut res = HttpResponse::build(self.status_code());
        if let ApiError::Unauthorized = self {
            res.insert_header((header::WWW_AUTHENTICATE, r#"Basic realm="admin""#));
        }
        res.content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
