use axum::{
    Extension, Json, Router,
    extract::State,
    middleware::from_fn,
    routing::get,
};

use paygate_core::auth::{Claims, auth_middleware};

use crate::app::middleware::auth::JwtAuthenticator;
use crate::app::response::{ErrorBody, HealthResponse, WhoamiResponse};
use crate::app::state::AppState;

/// Mounts the route table. Protected routes sit behind the verification
/// middleware; the authenticator travels as an extension so the middleware
/// and handlers share one instance.
pub fn routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/whoami", get(whoami))
        .layer(from_fn(auth_middleware::<JwtAuthenticator>))
        .layer(Extension(state.authenticator.clone()));

    Router::new()
        .route("/health", get(health))
        .merge(protected)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        database: state.db.is_some(),
    })
}

#[utoipa::path(
    get,
    path = "/whoami",
    responses(
        (status = 200, description = "Verified token subject", body = WhoamiResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
    )
)]
pub(crate) async fn whoami(Extension(claims): Extension<Claims>) -> Json<WhoamiResponse> {
    Json(WhoamiResponse { sub: claims.sub })
}
