//! Payloads carried on the page's [`EventChannel`](storefront_framework::EventChannel).

use crate::model::{Review, VariantId};
use serde::Serialize;

/// Topic the review form publishes on and the review list listens to.
pub const REVIEW_SUBMITTED: &str = "review-submitted";

/// Topic announcing a cart change for the selected variant.
pub const CART_UPDATED: &str = "cart-updated";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum StorefrontEvent {
    ReviewSubmitted(Review),
    CartUpdated { variant_id: VariantId, count: usize },
}

impl StorefrontEvent {
    /// The topic this event belongs on.
    pub fn topic(&self) -> &'static str {
        match self {
            StorefrontEvent::ReviewSubmitted(_) => REVIEW_SUBMITTED,
            StorefrontEvent::CartUpdated { .. } => CART_UPDATED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_name_their_topic() {
        let review = StorefrontEvent::ReviewSubmitted(Review::new("Alice", "Great socks", 5));
        assert_eq!(review.topic(), REVIEW_SUBMITTED);

        let cart = StorefrontEvent::CartUpdated {
            variant_id: VariantId(2234),
            count: 1,
        };
        assert_eq!(cart.topic(), CART_UPDATED);
    }

    #[test]
    fn serializes_with_event_tag() {
        let event = StorefrontEvent::CartUpdated {
            variant_id: VariantId(2235),
            count: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "event": "cart-updated", "variant_id": 2235, "count": 2 })
        );
    }
}
