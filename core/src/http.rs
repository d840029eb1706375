//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — a [`Fetch`](crate::fetch::Fetch) implementation
//! executes the actual I/O. This separation keeps the decoders
//! deterministic and easy to test.
//!
//! TheMealDB API is read-only: every call is a GET with no request body and
//! no custom headers, so a request is nothing more than a URL.

/// An HTTP GET request described as plain data.
///
/// Built by `MealDbClient::build_*` methods and executed by a
/// [`Fetch`](crate::fetch::Fetch) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// The body is kept as raw bytes; `MealDbClient::parse_*` methods own both
/// the status interpretation and the JSON decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Shorthand for a 200 response with the given body, used all over the
    /// decoder tests.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}
