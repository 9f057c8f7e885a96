pub mod middleware;
pub mod response;
pub mod state;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use paygate_core::response::ApiError;
use state::AppState;

/// Request body cap, generous enough for the form posts coming back from
/// the hosted checkout pages.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Assembles the application: the route table wrapped by the cross-cutting
/// layers, plus the catch-all for unregistered paths.
///
/// Layer order mirrors registration order: request tracing, then CORS,
/// then the security headers, then the body limit. Every route and the
/// fallback run inside all of them.
pub fn build_app(state: AppState) -> Router {
    crate::routes::routes(state)
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(axum::middleware::from_fn(middleware::security::security_headers))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn fallback() -> ApiError {
    ApiError::not_found("route not found")
}
