//! Application Router
//!
//! Mounts the auth and notes routers under `/api`.

use std::sync::Arc;

use auth::{AuthConfig, UserRepository, auth_router_generic};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
};
use kernel::error::app_error::AppError;
use notes::{NoteRepository, notes_router_generic};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Request body limit (10 MiB)
const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the full API router over any store implementations
pub fn api_router<N, U>(notes: N, users: U, config: Arc<AuthConfig>) -> Router
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/auth", auth_router_generic(users.clone(), config.clone()))
        .nest("/api/notes", notes_router_generic(notes, users, config))
        .fallback(|| async { AppError::not_found("Route not found") })
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the web client
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
