use axum::{
    extract::Request, http::StatusCode, middleware::Next, response::Response,
};
use serde::{Deserialize, Serialize};

use crate::response::ApiError;

/// Claims carried by a verified token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Token verification seam.
///
/// The server registers one implementation as a request extension;
/// `auth_middleware` and handlers verify through it without knowing the
/// signature scheme.
pub trait Authenticator: Clone + Send + Sync + 'static {
    fn verify(&self, token: &str) -> Result<Claims, ApiError>;

    /// Header the token travels in.
    fn header_name(&self) -> &'static str {
        "Authorization"
    }
}

/// Verifies the request token and exposes its [`Claims`] as an extension
/// for the handlers behind it.
#[tracing::instrument(level = "debug", skip(request, next))]
pub async fn auth_middleware<A>(mut request: Request, next: Next) -> Result<Response, ApiError>
where
    A: Authenticator,
{
    let Some(authenticator) = request.extensions().get::<A>().cloned() else {
        tracing::error!("no Authenticator extension available");

        return Err(ApiError::with_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "authentication unavailable",
        ));
    };

    let Some(header) = request.headers().get(authenticator.header_name()) else {
        return Err(ApiError::unauthorized("missing token"));
    };

    let header = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("malformed token"))?;
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let claims = authenticator.verify(token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Extension, Json, Router, body::Body, http::Request, middleware::from_fn, routing::get,
    };
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StaticAuthenticator;

    impl Authenticator for StaticAuthenticator {
        fn verify(&self, token: &str) -> Result<Claims, ApiError> {
            if token == "good-token" {
                Ok(Claims {
                    sub: "user-1".into(),
                    exp: usize::MAX,
                })
            } else {
                Err(ApiError::unauthorized("invalid token"))
            }
        }
    }

    async fn subject(Extension(claims): Extension<Claims>) -> Json<String> {
        Json(claims.sub)
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(subject))
            .layer(from_fn(auth_middleware::<StaticAuthenticator>))
            .layer(Extension(StaticAuthenticator))
    }

    fn request(header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn verified_claims_reach_the_handler() {
        let response = app()
            .oneshot(request(Some("Bearer good-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn bare_token_without_scheme_is_accepted() {
        let response = app().oneshot(request(Some("good-token"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let response = app().oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejected_token_is_401() {
        let response = app().oneshot(request(Some("Bearer forged"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_extension_is_500() {
        let app = Router::new()
            .route("/", get(subject))
            .layer(from_fn(auth_middleware::<StaticAuthenticator>));

        let response = app.oneshot(request(Some("good-token"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
