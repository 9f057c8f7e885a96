pub use paygate_core::auth::auth_middleware;

use jsonwebtoken::{DecodingKey, Validation, decode};
use paygate_core::auth::{Authenticator, Claims};
use paygate_core::response::ApiError;

/// HS256 token verification backed by the configured application secret.
#[derive(Clone)]
pub struct JwtAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

impl Authenticator for JwtAuthenticator {
    fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("token rejected {:?}", err);

                ApiError::unauthorized("invalid token")
            })
    }
}
