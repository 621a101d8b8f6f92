//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product page needs at least one variant.
    #[error("Product has no variants")]
    NoVariants,

    /// A variant index outside the product's variant list. The rendering surface only
    /// offers indices it enumerated, so this points at a caller defect.
    #[error("Variant index {index} out of range (product has {len} variants)")]
    OutOfRange { index: usize, len: usize },

    /// The actor answered with a result that does not match the request.
    #[error("Unexpected catalog response: {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
