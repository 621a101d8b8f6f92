//! Custom actions for the catalog actor.
//!
//! Selection changes go through `update` with a
//! [`VariantSelection`](crate::model::VariantSelection); the actions below are the reads
//! the page needs on top of a plain `get`.

use crate::model::{DerivedView, Variant};

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// The variant at the current selection.
    CurrentVariant,
    /// Title, image, stock and shipping for the current selection, priced with the
    /// membership flag the actor was started with.
    DerivedView,
}

/// Results from CatalogActions - variants match 1:1 with CatalogAction
#[derive(Debug, Clone)]
pub enum CatalogActionResult {
    CurrentVariant(Variant),
    DerivedView(DerivedView),
}
