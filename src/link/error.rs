use thiserror::Error;

/// Failures raised inside the link chain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LinkError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Response decode error: {0}")]
    Decode(String),
    #[error("Link chain ended without a terminating link")]
    Terminated,
}
