//! A shopper's cart: the ordered units queued for checkout.
//!
//! # Actor Framework
//! [`Cart`] implements [`ActorEntity`](storefront_framework::ActorEntity) so that concurrent
//! add/remove requests are applied one at a time by its actor. The counting rules live in
//! [`CartLedger`], which has no knowledge of actors.

use crate::model::VariantId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Ordered multiset of variant ids.
///
/// Ids are not checked against any catalog; a ledger may hold ids that no longer exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLedger {
    entries: Vec<VariantId>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one more unit of `id`. Duplicates are expected.
    pub fn add(&mut self, id: VariantId) {
        self.entries.push(id);
    }

    /// Removes the earliest queued unit of `id`. Returns `false`, and changes nothing,
    /// if there is none.
    pub fn remove(&mut self, id: VariantId) -> bool {
        match self.entries.iter().position(|entry| *entry == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, id: VariantId) -> usize {
        self.entries.iter().filter(|entry| **entry == id).count()
    }

    pub fn entries(&self) -> &[VariantId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub ledger: CartLedger,
}

/// Payload for opening a cart. Carts always start empty.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            ledger: CartLedger::new(),
        }
    }
}
