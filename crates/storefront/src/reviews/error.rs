use storefront_framework::ChannelError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The draft is incomplete. `messages` is ordered author, body, rating and is meant to
    /// be shown next to the form as-is.
    #[error("Review rejected: {}", messages.join(" "))]
    ValidationFailed { messages: Vec<String> },

    #[error(transparent)]
    Channel(#[from] ChannelError),
}
