//! Web API router construction and shared response utilities.

use axum::Router;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

use crate::state::AppState;
use crate::web::{popular_words, status};

/// Cache-Control presets for public endpoints.
pub mod cache {
    /// Popular word lists. Already memoized in-process; edge caches may
    /// hold them briefly on top.
    pub const SUGGEST: &str = "public, max-age=60, s-maxage=300, stale-while-revalidate=120";
}

/// Wraps a JSON response with a `Cache-Control` header.
pub fn with_cache_control<T: serde::Serialize>(value: T, header: &'static str) -> Response {
    let mut response = Json(value).into_response();
    response.headers_mut().insert(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(header),
    );
    response
}

/// Creates the web server router.
///
/// The popular-words route is only registered when enabled in config, so
/// disabling the feature surfaces as a plain 404.
pub fn create_router(app_state: AppState) -> Router {
    let mut api_router = Router::new()
        .route("/health", get(status::health))
        .route("/status", get(status::status));
    if app_state.popular_words_enabled {
        api_router = api_router.route("/popular-words", get(popular_words::popular_words));
    }

    Router::new()
        .nest("/api", api_router.with_state(app_state))
        .layer((
            CompressionLayer::new(),
            TimeoutLayer::new(Duration::from_secs(30)),
        ))
}
