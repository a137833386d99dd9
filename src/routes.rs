use actix_web::{
    http::{header, Method},
    middleware::DefaultHeaders,
    web,
};

use crate::api::{create_review, delete_review, get_reviews, method_not_allowed, preflight};

pub const REVIEWS_PATH: &str = "/reviews";
pub const DELETE_REVIEW_PATH: &str = "/delete-review";

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";

/// Permissive CORS headers, added to every response that does not already set them.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

// Register the review routes; unrouted verbs fall through to 405
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(REVIEWS_PATH)
            .route(web::get().to(get_reviews))
            .route(web::post().to(create_review))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(DELETE_REVIEW_PATH)
            .route(web::delete().to(delete_review))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}
