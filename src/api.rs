use actix_web::{web, HttpResponse};
use futures::StreamExt;
use log::{error, info, warn};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::review::{CreatedResponse, DeleteRequest, DeletedResponse, NewReview};
use crate::service::ReviewService;

/// Largest request body accepted by create and delete. Larger bodies are a client-input error.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

// Read the whole body without actix's default payload limit.
async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, ApiError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!("[API] Failed reading request body: {}", e);
            ApiError::InvalidPayload(e.to_string())
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            warn!("[API] Rejected body larger than {} bytes", MAX_BODY_BYTES);
            return Err(ApiError::BodyTooLarge(MAX_BODY_BYTES));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

// Decode the first JSON value in the body; anything after it is ignored.
// The Content-Type header does not matter.
fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let rejected = |reason: String| {
        warn!("[API] Rejected payload: {}", reason);
        ApiError::InvalidPayload(reason)
    };
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(rejected(e.to_string())),
        None => Err(rejected("empty body".to_string())),
    }
}

pub async fn get_reviews(service: web::Data<ReviewService>) -> Result<HttpResponse, ApiError> {
    let reviews = service.list().await.map_err(|e| {
        error!("[API] Failed to load reviews: {:?}", e);
        e
    })?;
    info!("[API] Returning {} reviews", reviews.len());
    Ok(HttpResponse::Ok().json(reviews))
}

pub async fn create_review(
    service: web::Data<ReviewService>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let new_review: NewReview = parse_payload(&read_body(payload).await?)?;
    let id = service.create(new_review).await.map_err(|e| {
        if let ApiError::SaveFailed(source) = &e {
            error!("[API] Database error while saving review: {:?}", source);
        }
        e
    })?;
    info!("[API] Saved review {}", id);
    Ok(HttpResponse::Ok().json(CreatedResponse { success: true, id }))
}

pub async fn delete_review(
    service: web::Data<ReviewService>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let request: DeleteRequest = parse_payload(&read_body(payload).await?)?;
    service.delete(request.id).await.map_err(|e| {
        error!("[API] Failed to delete review {}: {}", request.id, e);
        e
    })?;
    info!("[API] Deleted review {}", request.id);
    Ok(HttpResponse::Ok().json(DeletedResponse { success: true }))
}

/// Pre-flight answer: status 200, no body. CORS headers come from the middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
