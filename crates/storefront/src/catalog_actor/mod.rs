//! # Catalog Actor
//!
//! Hosts the product page's variant catalog: the product, its variants and which one is
//! selected. Everything that reads or moves the selection goes through this actor, so the
//! selection index is always valid.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](storefront_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`CatalogError`]
//! - [`actions`] - [`CatalogAction`] and [`CatalogActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::catalog_actor::{self, CatalogContext};
//! use storefront::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(32);
//!     tokio::spawn(actor.run(CatalogContext { premium: true }));
//!
//!     let id = client.create_product(ProductCreate::socks()).await?;
//!     client.select_variant(id.clone(), 1).await?;
//!     let view = client.derived_view(id).await?;
//!     assert_eq!(view.image, "blueSocks.jpg");
//!     assert_eq!(view.shipping.cost(), 0.0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CatalogContext;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Product;
use storefront_framework::ResourceActor;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
