//! Errors surfaced at the page boundary.

use crate::cart_actor::CartError;
use crate::catalog_actor::CatalogError;
use crate::config::ConfigError;
use crate::model::VariantId;
use storefront_framework::ChannelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The cart buttons are disabled for a variant with no stock.
    #[error("Variant {0} is out of stock")]
    OutOfStock(VariantId),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
