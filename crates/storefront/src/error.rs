//! Storefront error type and its HTTP mapping.
//!
//! Handlers return [`Result<T>`]. Client mistakes become 4xx responses with a
//! short plain-text reason; server faults are reported to Sentry and the
//! client only sees a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jungle_magic_core::{CartError, ProductId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Cart(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text sent to the client.
    fn public_message(&self) -> String {
        match self {
            Self::Cart(err) => err.to_string(),
            Self::NotFound(_) | Self::BadRequest(_) => self.to_string(),
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        (status, self.public_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Leave a Sentry breadcrumb for a cart change.
///
/// Any error reported later in the same scope shows which products were
/// added on the way there.
pub fn cart_breadcrumb(message: &str, product_id: ProductId, quantity: u32) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some("cart".to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };
    breadcrumb
        .data
        .insert("product_id".to_string(), product_id.as_u32().into());
    breadcrumb
        .data
        .insert("quantity".to_string(), serde_json::Value::from(quantity));

    sentry::add_breadcrumb(breadcrumb);
}
