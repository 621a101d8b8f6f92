//! Error types for the cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// The ledger itself never fails: adding accepts any id and removing an absent id is a
/// no-op. What remains is addressing and transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// The actor answered with a result that does not match the request.
    #[error("Unexpected cart response: {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
