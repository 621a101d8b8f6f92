//! # Storefront
//!
//! Reactive state for a single product page: variant selection and the derived view,
//! the shopper's cart, and a review board whose two halves talk over an event channel.
//!
//! This library exposes the page's modules for the binary and for integration testing.

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod reviews;
