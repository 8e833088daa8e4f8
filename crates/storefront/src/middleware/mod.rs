//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with `request_id` field)
//! 3. Request ID (record in span, echo in response)
//! 4. Security headers (CSP, frame options, caching)
//! 5. Session layer (tower-sessions over [`session::MokaSessionStore`])
//!
//! The [`SessionCart`] extractor reads the session installed by layer 5.

pub mod cart;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use cart::SessionCart;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
