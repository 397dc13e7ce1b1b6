//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("local validation error: {0}")]
    LocalValidation(#[from] LocalValidationError),

    #[error("term error: {0}")]
    Term(#[from] TermError),
}

/// Transport or HTTP failure while retrieving the curve or the order list.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status} {status_text}: {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Order creation rejected by the server, or never reached it.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The server answered with a non-success status. The message is already
    /// interpreted: validation entries joined, a raw string reason, or a
    /// generic `<status> <status-text>` fallback.
    #[error("order rejected: {0}")]
    Rejected(String),

    /// No response at all; wraps the transport failure description.
    #[error("submission failed: {0}")]
    Transport(String),
}

/// User input rejected before any request is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocalValidationError {
    #[error("amount is not a number: {0:?}")]
    NotANumber(String),

    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Malformed or uncomputable term code.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TermError {
    #[error("invalid term format: {0:?}")]
    InvalidTermFormat(String),

    /// The code is well-formed but the resulting maturity date is not
    /// representable.
    #[error("maturity date out of range for term: {0:?}")]
    OutOfRange(String),
}
