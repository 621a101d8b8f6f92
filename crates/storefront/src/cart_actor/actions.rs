//! Custom actions for the cart actor.

use crate::model::VariantId;

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Queue one unit of a variant.
    Add(VariantId),
    /// Drop the earliest queued unit of a variant, if any.
    Remove(VariantId),
    /// How many units of a variant are queued.
    Count(VariantId),
    /// Every queued unit in insertion order.
    Contents,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// Units of the added variant now in the cart.
    Add(usize),
    /// Whether a unit was actually removed.
    Remove(bool),
    Count(usize),
    Contents(Vec<VariantId>),
}
