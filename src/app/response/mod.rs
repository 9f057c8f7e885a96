pub use paygate_core::response::ErrorBody;

/// Body of the liveness probe.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
}

/// Subject echoed back by the token check route.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct WhoamiResponse {
    pub sub: String,
}
