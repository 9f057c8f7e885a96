use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Allow-lists for the `Content-Security-Policy` header.
///
/// The third-party origins cover the hosted payment checkout pages and the
/// CDN the frontend loads assets from.
pub struct CspDirectives {
    pub default_src: &'static [&'static str],
    pub frame_src: &'static [&'static str],
    pub connect_src: &'static [&'static str],
    pub script_src: &'static [&'static str],
    pub img_src: &'static [&'static str],
}

pub const CSP: CspDirectives = CspDirectives {
    default_src: &["'self'"],
    frame_src: &["'self'", "https://checkout-v3-ui-prod.f4b-flutterwave.com"],
    connect_src: &["'self'", "https://api.ravepay.co"],
    script_src: &[
        "'self'",
        "'unsafe-inline'",
        "https://checkout.flutterwave.com",
        "https://api.ravepay.co/v2/checkout/upgrade",
        "*",
    ],
    img_src: &["'self'", "data:", "https://res.cloudinary.com"],
};

impl CspDirectives {
    pub fn header_value(&self) -> String {
        [
            ("default-src", self.default_src),
            ("frame-src", self.frame_src),
            ("connect-src", self.connect_src),
            ("script-src", self.script_src),
            ("img-src", self.img_src),
        ]
        .iter()
        .map(|(name, sources)| format!("{} {}", name, sources.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// Appends the security headers to every response, error responses
/// included.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    if let Ok(csp) = HeaderValue::from_str(&CSP.header_value()) {
        headers.insert(header::CONTENT_SECURITY_POLICY, csp);
    }
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_render_in_fixed_order() {
        let value = CSP.header_value();
        let directives: Vec<&str> = value.split("; ").collect();

        assert_eq!(directives[0], "default-src 'self'");
        assert_eq!(
            directives[1],
            "frame-src 'self' https://checkout-v3-ui-prod.f4b-flutterwave.com"
        );
        assert_eq!(directives[2], "connect-src 'self' https://api.ravepay.co");
        assert_eq!(
            directives[4],
            "img-src 'self' data: https://res.cloudinary.com"
        );
    }

    #[test]
    fn script_sources_include_the_checkout_origins() {
        let value = CSP.header_value();

        assert!(value.contains("https://checkout.flutterwave.com"));
        assert!(value.contains("https://api.ravepay.co/v2/checkout/upgrade"));
    }

    #[test]
    fn header_value_is_a_valid_header() {
        assert!(HeaderValue::from_str(&CSP.header_value()).is_ok());
    }
}
