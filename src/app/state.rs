use sea_orm::DatabaseConnection;

use crate::app::middleware::auth::JwtAuthenticator;
use crate::config::AppConfig;

/// Shared handler state, created once in the bootstrap and injected into
/// the router. The database connection is optional so the API surface can
/// come up without persistence configured.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<DatabaseConnection>,
    pub authenticator: JwtAuthenticator,
}

impl AppState {
    pub fn new(config: &AppConfig, db: Option<DatabaseConnection>) -> Self {
        Self {
            db,
            authenticator: JwtAuthenticator::new(&config.jwt_secret),
        }
    }
}
