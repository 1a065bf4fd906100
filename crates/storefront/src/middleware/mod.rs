//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, performance transactions)
//! 2. `TraceLayer` (request span with `request_id` field)
//! 3. Request ID (reuse or generate, echo in response)
//! 4. Security headers (CSP, framing, caching)

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
