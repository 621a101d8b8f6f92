//! [`ActorEntity`] implementation for [`Product`].
//!
//! The entity is created from a [`ProductCreate`], moved between variants with a
//! [`VariantSelection`] update, and read through [`CatalogAction`]s. The membership flag
//! arrives as [`CatalogContext`] when the actor is started.

use super::actions::{CatalogAction, CatalogActionResult};
use super::error::CatalogError;
use crate::model::{Product, ProductCreate, ProductId, VariantSelection};
use async_trait::async_trait;
use storefront_framework::ActorEntity;
use tracing::debug;

/// Page-wide values the catalog actor needs but does not own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogContext {
    /// Premium shoppers get free shipping.
    pub premium: bool,
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = VariantSelection;
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = CatalogContext;
    type Error = CatalogError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Product::new(id, params)
    }

    /// Moves the selection. An invalid index is rejected before anything changes.
    async fn on_update(
        &mut self,
        selection: VariantSelection,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let variant = self.select_variant(selection.index)?;
        debug!(variant_id = %variant.id, color = %variant.color, "Variant selected");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        ctx: &Self::Context,
    ) -> Result<CatalogActionResult, Self::Error> {
        match action {
            CatalogAction::CurrentVariant => {
                Ok(CatalogActionResult::CurrentVariant(self.current_variant().clone()))
            }
            CatalogAction::DerivedView => {
                Ok(CatalogActionResult::DerivedView(self.derived_view(ctx.premium)))
            }
        }
    }
}
