//! # Review Board
//!
//! Two halves that only meet through the page's
//! [`EventChannel`](storefront_framework::EventChannel): [`ReviewForm`] validates a draft
//! and publishes it on `"review-submitted"`, [`ReviewList`] listens there and keeps the
//! published collection.
//!
//! Nothing here is hosted in an actor. Publishing is synchronous, so a review is in the
//! list by the time `submit` returns.

pub mod error;
pub mod form;
pub mod list;

pub use error::*;
pub use form::*;
pub use list::*;
