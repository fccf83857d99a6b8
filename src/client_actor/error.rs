use thiserror::Error;
use crate::link::LinkError;

/// Errors surfaced by the GraphQL client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Link error: {0}")]
    Link(#[from] LinkError),
    #[error("Data decode error: {0}")]
    Decode(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
