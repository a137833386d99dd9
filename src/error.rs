use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be read or decoded; the reason is logged, not returned.
    #[error("Invalid request payload")]
    InvalidPayload(String),

    #[error("Invalid request payload: body exceeds {0} bytes")]
    BodyTooLarge(usize),

    #[error("Invalid rating value. Must be between 1 and 5.")]
    InvalidRating(i64),

    #[error("Failed to delete review: no review found with id {0}")]
    ReviewNotFound(i64),

    #[error("Failed to save review")]
    SaveFailed(#[source] DbError),

    #[error("Failed to load reviews")]
    LoadFailed(#[source] DbError),

    #[error("Failed to delete review: {0}")]
    DeleteFailed(#[source] DbError),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn from_delete(err: DbError) -> Self {
        match err {
            DbError::NotFound(id) => ApiError::ReviewNotFound(id),
            other => ApiError::DeleteFailed(other),
        }
    }
}

impl ResponseError for ApiError {
    // A missing review is reported as a server error, matching the
    // established behaviour of this endpoint.
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_)
            | ApiError::BodyTooLarge(_)
            | ApiError::InvalidRating(_) => StatusCode::BAD_REQUEST,
            ApiError::ReviewNotFound(_)
            | ApiError::SaveFailed(_)
            | ApiError::LoadFailed(_)
            | ApiError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
