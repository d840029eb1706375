//! Fetch capability and the production ureq-backed implementation.
//!
//! # Design
//! The stores depend only on the [`Fetch`] trait, never on a concrete
//! transport. Production wiring supplies [`UreqFetch`]; tests supply stubs
//! that replay canned responses. Each call is exactly one attempt — no
//! retries, no backoff, no request deduplication.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Capability for executing a pipeline request.
pub trait Fetch {
    /// Execute one GET and return the raw response. Transport failures
    /// surface as [`ApiError::Http`] with no status code; non-2xx statuses
    /// are returned as data for the decoders to interpret.
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Production fetcher backed by ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, letting the decoders own
/// status interpretation.
#[derive(Debug)]
pub struct UreqFetch {
    agent: ureq::Agent,
}

impl UreqFetch {
    #[must_use]
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for UreqFetch {
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "GET");

        let mut response = self.agent.get(&request.url).call().map_err(|e| {
            ApiError::Http {
                status: None,
                message: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(|e| {
            ApiError::Http {
                status: Some(status),
                message: format!("failed to read response body: {e}"),
            }
        })?;

        Ok(HttpResponse { status, body })
    }
}
