//! Response hardening headers.
//!
//! The storefront ships no scripts, so the policy only opens up stylesheets
//! from our own origin and images from the placeholder image host.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, header::CACHE_CONTROL},
    middleware::Next,
    response::Response,
};

/// Content Security Policy applied to every response.
///
/// `img-src` must include `catalog::PLACEHOLDER_IMAGE_HOST`.
pub const CONTENT_SECURITY_POLICY_VALUE: &str = concat!(
    "default-src 'none'; ",
    "script-src 'none'; ",
    "style-src 'self'; ",
    "img-src 'self' https://placehold.co; ",
    "form-action 'self'; ",
    "base-uri 'self'; ",
    "frame-ancestors 'none'",
);

/// Headers set on every response, overwriting any a handler set.
const FIXED_HEADERS: [(&str, &str); 6] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("content-security-policy", CONTENT_SECURITY_POLICY_VALUE),
    (
        "permissions-policy",
        "camera=(), geolocation=(), microphone=(), payment=(), usb=()",
    ),
    ("cross-origin-opener-policy", "same-origin"),
];

/// Pages embed the session's cart, so they must not be cached.
const DEFAULT_CACHE_CONTROL: &str = "no-store, max-age=0";

/// Apply [`FIXED_HEADERS`], and `Cache-Control: no-store` unless the
/// response already chose its own caching (static files do).
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in FIXED_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    headers
        .entry(CACHE_CONTROL)
        .or_insert(HeaderValue::from_static(DEFAULT_CACHE_CONTROL));

    response
}
