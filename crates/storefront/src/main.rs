//! # Storefront demo
//!
//! Runs one scripted shopping session against the sock page:
//! 1. Start the [`Storefront`] with configuration from the environment.
//! 2. Switch to the blue variant and put two pairs in the cart, then take one out.
//! 3. Submit an incomplete review, fix it, and submit again.
//!
//! ```bash
//! STOREFRONT_PREMIUM=yes RUST_LOG=info cargo run -p storefront
//! ```

use storefront::config::StorefrontConfig;
use storefront::lifecycle::{Storefront, StorefrontError};
use storefront::model::{DraftUpdate, ProductCreate, StorefrontEvent, CART_UPDATED};
use storefront::reviews::ReviewError;
use storefront_framework::tracing::setup_tracing;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront");

    let mut page = Storefront::start(config, ProductCreate::socks()).await?;

    let badge = page.events().subscribe(CART_UPDATED, |event: &StorefrontEvent| {
        if let StorefrontEvent::CartUpdated { variant_id, count } = event {
            info!(%variant_id, count, "Cart badge updated");
        }
    });

    let view = page.derived_view().await?;
    info!(title = %view.title, image = %view.image, shipping = %view.shipping, "Page rendered");

    let span = tracing::info_span!("shopping");
    async {
        let view = page.select_variant(1).await?;
        info!(image = %view.image, stock = view.stock_level, "Variant selected");

        page.add_to_cart().await?;
        page.add_to_cart().await?;
        page.remove_from_cart().await?;

        let contents = page.cart_contents().await?;
        info!(?contents, "Cart contents");
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("reviewing");
    let entered = span.enter();

    page.update_draft_field(DraftUpdate::Author("Alice".into()));
    match page.submit_review() {
        Err(ReviewError::ValidationFailed { messages }) => {
            warn!(?messages, state = ?page.draft_state(), "Review needs more input")
        }
        Err(e) => error!(error = %e, "Review submission failed"),
        Ok(review) => info!(?review, "Review accepted early"),
    }

    page.update_draft_field(DraftUpdate::Body("Great socks".into()));
    page.update_draft_field(DraftUpdate::Rating(Some(5)));
    match page.submit_review() {
        Ok(review) => info!(author = %review.author, rating = review.rating, "Review published"),
        Err(e) => error!(error = %e, "Review submission failed"),
    }
    info!(reviews = page.review_collection().len(), "Review board");
    drop(entered);

    page.events().unsubscribe(&badge);
    page.shutdown().await?;

    info!("Session complete");
    Ok(())
}
