//! Error types for the meal pipeline.
//!
//! # Design
//! Exactly three kinds of failure can surface from a load: the request
//! itself failed (`Http`), the server answered with nothing (`NoData`), or
//! the body was not the JSON shape we expect (`Decoding`). All three are
//! terminal for the triggering load — a malformed decode never applies
//! partially. Variants carry owned strings rather than source errors so the
//! enum stays `Clone` and can live inside observable state snapshots.

use thiserror::Error;

/// Errors surfaced by the fetch → decode pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned a non-2xx status (`status` is `Some`), or the
    /// request failed at the transport level (`status` is `None`).
    #[error("HTTP error: {message}")]
    Http {
        status: Option<u16>,
        message: String,
    },

    /// A 2xx response arrived with an empty body.
    #[error("empty response body")]
    NoData,

    /// The response body could not be decoded into the expected shape.
    #[error("decoding failed: {0}")]
    Decoding(String),
}
