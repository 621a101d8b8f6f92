//! # Cart Client
//!
//! High-level API for the cart actor.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartId, VariantId};
use async_trait::async_trait;
use storefront_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CartError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Opens a new, empty cart.
    #[instrument(skip(self))]
    pub async fn open_cart(&self) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(Self::map_error)
    }

    /// Queues one unit of `variant_id`. Returns how many units of it are now queued.
    #[instrument(skip(self))]
    pub async fn add(&self, id: CartId, variant_id: VariantId) -> Result<usize, CartError> {
        match self.act(id, CartAction::Add(variant_id)).await? {
            CartActionResult::Add(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the earliest queued unit of `variant_id`. `Ok(false)` when there was none.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: CartId, variant_id: VariantId) -> Result<bool, CartError> {
        match self.act(id, CartAction::Remove(variant_id)).await? {
            CartActionResult::Remove(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self, id: CartId, variant_id: VariantId) -> Result<usize, CartError> {
        match self.act(id, CartAction::Count(variant_id)).await? {
            CartActionResult::Count(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    /// Every queued unit, oldest first.
    #[instrument(skip(self))]
    pub async fn contents(&self, id: CartId) -> Result<Vec<VariantId>, CartError> {
        match self.act(id, CartAction::Contents).await? {
            CartActionResult::Contents(entries) => Ok(entries),
            other => Err(unexpected(other)),
        }
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::UnexpectedResponse(format!("{result:?}"))
}
