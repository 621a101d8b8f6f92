//! The product shown on the page and the variant currently selected.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](storefront_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](storefront_framework::ResourceActor).
//!
//! The implementation lives in [`crate::catalog_actor::entity`]:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`VariantSelection`])
//! - Custom actions ([`CatalogAction`](crate::catalog_actor::CatalogAction))

use crate::catalog_actor::CatalogError;
use crate::model::{Variant, VariantId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Flat fee charged to shoppers without a premium membership.
pub const FIXED_SHIPPING_FEE: f64 = 2.99;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Invariant: `variants` is never empty and `selected_index < variants.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub details: Vec<String>,
    variants: Vec<Variant>,
    selected_index: usize,
}

/// Payload for creating a product page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub brand: String,
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl ProductCreate {
    /// The sock listing used by the demo binary and the tests.
    pub fn socks() -> Self {
        Self {
            name: "Socks".to_string(),
            brand: "Trailhead".to_string(),
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            variants: vec![
                Variant::new(2234, "green", "greenSocks.jpg", 10),
                Variant::new(2235, "blue", "blueSocks.jpg", 9),
            ],
        }
    }
}

/// Update payload: move the selection to another variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSelection {
    pub index: usize,
}

/// What the shopper pays for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shipping {
    Free,
    Flat(f64),
}

impl Shipping {
    pub fn for_membership(premium: bool) -> Self {
        if premium {
            Shipping::Free
        } else {
            Shipping::Flat(FIXED_SHIPPING_FEE)
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            Shipping::Free => 0.0,
            Shipping::Flat(fee) => *fee,
        }
    }
}

impl Display for Shipping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shipping::Free => write!(f, "Free"),
            Shipping::Flat(fee) => write!(f, "{fee:.2}"),
        }
    }
}

/// Values computed from the current selection and the membership flag.
/// Never stored; recompute after every selection change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub title: String,
    pub image: String,
    pub stock_level: i32,
    pub in_stock: bool,
    pub shipping: Shipping,
}

impl Product {
    /// Creates a Product with the first variant selected.
    ///
    /// # Errors
    /// [`CatalogError::NoVariants`] when `params.variants` is empty.
    pub fn new(id: ProductId, params: ProductCreate) -> Result<Self, CatalogError> {
        if params.variants.is_empty() {
            return Err(CatalogError::NoVariants);
        }
        Ok(Self {
            id,
            name: params.name,
            brand: params.brand,
            details: params.details,
            variants: params.variants,
            selected_index: 0,
        })
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Selects the variant at `index`.
    ///
    /// # Errors
    /// [`CatalogError::OutOfRange`] if `index` is not a valid position; the selection is
    /// left as it was.
    pub fn select_variant(&mut self, index: usize) -> Result<&Variant, CatalogError> {
        if index >= self.variants.len() {
            return Err(CatalogError::OutOfRange {
                index,
                len: self.variants.len(),
            });
        }
        self.selected_index = index;
        Ok(&self.variants[index])
    }

    pub fn current_variant(&self) -> &Variant {
        &self.variants[self.selected_index]
    }

    pub fn current_variant_id(&self) -> VariantId {
        self.current_variant().id
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    pub fn derived_view(&self, premium: bool) -> DerivedView {
        let variant = self.current_variant();
        DerivedView {
            title: self.title(),
            image: variant.image.clone(),
            stock_level: variant.quantity,
            in_stock: variant.in_stock(),
            shipping: Shipping::for_membership(premium),
        }
    }
}
