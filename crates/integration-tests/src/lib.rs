//! Integration tests for the Jungle Magic storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jungle-magic-integration-tests
//! ```
//!
//! Tests drive the full storefront router in-process (routes, templates,
//! session layer and middleware) without binding a socket. [`TestClient`]
//! plays the browser: it keeps the session cookie between requests.

use axum::{
    Router,
    body::Body,
    http::{
        HeaderMap, Method, Request, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
};
use jungle_magic_storefront::{
    app::build_router, catalog::Catalog, config::StorefrontConfig, state::AppState,
};
use tower::ServiceExt;

/// A response with its body collected as text.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of a response header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A cookie-carrying client for one browser session.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// A fresh storefront with the sample catalog and default config.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default(), Catalog::sample());
        Self {
            app: build_router(state),
            cookie: None,
        }
    }

    /// A second browser against the same running storefront.
    ///
    /// `clone()` instead gives another tab of the same browser.
    #[must_use]
    pub fn new_session(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, &[], Body::empty()).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            &[("content-type", "application/x-www-form-urlencoded")],
            Body::from(form.to_string()),
        )
        .await
    }

    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie);
        }

        let request = builder.body(body).expect("Failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        // Keep only `name=value` from the Set-Cookie header
        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            self.cookie = set_cookie
                .to_str()
                .ok()
                .and_then(|v| v.split(';').next())
                .map(str::to_string);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
