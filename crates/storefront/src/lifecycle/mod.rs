//! # Page Lifecycle
//!
//! [`Storefront`] starts the page's actors, wires the review board to the shared event
//! channel and is the single entry point a rendering surface talks to.
//!
//! Start order matters in one place: the [`ReviewList`](crate::reviews::ReviewList) is
//! mounted before the form exists, so its subscription can never miss a submission.
//! The catalog actor receives the membership flag as its context when it is spawned.
//!
//! Shutdown drops every client and awaits both actor tasks.

pub mod error;
pub mod storefront;

pub use error::*;
pub use storefront::*;
