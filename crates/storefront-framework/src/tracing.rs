//! # Observability
//!
//! Every actor logs its lifecycle (`Actor started`, `Shutdown`) and each request it handles
//! with an `entity_type` field; the event channel logs subscriptions and publishes at
//! `debug`. Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and state changes
//! RUST_LOG=debug cargo run     # request payloads and channel traffic
//! ```
//!
//! With `RUST_LOG=info` a short session reads like:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO Updated entity_type="Product" id=product_1
//! INFO Action ok entity_type="Cart" id=cart_1
//! ```

/// Installs the global `tracing` subscriber.
///
/// Compact output, no module targets (the `entity_type` field already says where a line
/// came from), filtered by `RUST_LOG`. Calling it again is harmless, which lets tests
/// and binaries share it.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
