//! [`ActorEntity`] implementation for [`Cart`].
//!
//! All ledger changes are actions, so the actor applies concurrent add/remove requests
//! one at a time. There is nothing to update in place.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::{Cart, CartCreate, CartId};
use async_trait::async_trait;
use storefront_framework::ActorEntity;
use tracing::debug;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &(),
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::Add(variant_id) => {
                self.ledger.add(variant_id);
                let count = self.ledger.count(variant_id);
                debug!(%variant_id, count, total = self.ledger.len(), "Added to cart");
                Ok(CartActionResult::Add(count))
            }
            CartAction::Remove(variant_id) => {
                let removed = self.ledger.remove(variant_id);
                debug!(%variant_id, removed, total = self.ledger.len(), "Removed from cart");
                Ok(CartActionResult::Remove(removed))
            }
            CartAction::Count(variant_id) => {
                Ok(CartActionResult::Count(self.ledger.count(variant_id)))
            }
            CartAction::Contents => Ok(CartActionResult::Contents(self.ledger.entries().to_vec())),
        }
    }
}
