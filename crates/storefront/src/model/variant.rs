use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of one purchasable variant, as printed on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantId(pub u32);

impl Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One configuration of a product: its swatch color, picture and stock.
///
/// Variants never change during a session. `quantity` is signed because upstream stock
/// feeds can report oversold items; anything at or below zero counts as out of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub color: String,
    pub image: String,
    pub quantity: i32,
}

impl Variant {
    pub fn new(
        id: u32,
        color: impl Into<String>,
        image: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id: VariantId(id),
            color: color.into(),
            image: image.into(),
            quantity,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
