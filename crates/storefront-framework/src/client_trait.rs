//! # ActorClient Trait
//!
//! Shared plumbing for the typed clients: each wrapper exposes its inner
//! [`ResourceClient`] and a mapping from [`FrameworkError`] into its own error type, and
//! gets `get`/`delete` for free.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by typed client wrappers such as a catalog or cart client.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The wrapper's error type.
    type Error: From<String> + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Converts a framework failure into the wrapper's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetches a snapshot of an entity.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Removes an entity.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
