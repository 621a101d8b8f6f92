use super::error::StorefrontError;
use crate::cart_actor;
use crate::catalog_actor::{self, CatalogContext, CatalogError};
use crate::clients::{CartClient, CatalogClient};
use crate::config::StorefrontConfig;
use crate::model::{
    CartId, DerivedView, DraftState, DraftUpdate, Product, ProductCreate, ProductId, Review,
    StorefrontEvent, Variant, VariantId, CART_UPDATED,
};
use crate::reviews::{ReviewError, ReviewForm, ReviewList};
use std::sync::Arc;
use storefront_framework::{ActorClient, EventChannel};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// One product page: catalog, cart and review board wired to a shared event channel.
///
/// The catalog and the cart live in their own actors, so concurrent callers are
/// serialized per resource. The review board is synchronous and only reachable through
/// `&mut self` for edits.
///
/// # Example
///
/// ```rust
/// use storefront::config::StorefrontConfig;
/// use storefront::lifecycle::Storefront;
/// use storefront::model::{DraftUpdate, ProductCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut page = Storefront::start(StorefrontConfig::default(), ProductCreate::socks()).await?;
///
///     page.select_variant(1).await?;
///     page.add_to_cart().await?;
///
///     page.update_draft_field(DraftUpdate::Author("Alice".into()));
///     page.update_draft_field(DraftUpdate::Body("Great socks".into()));
///     page.update_draft_field(DraftUpdate::Rating(Some(5)));
///     page.submit_review()?;
///     assert!(page.has_reviews());
///
///     page.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Storefront {
    config: StorefrontConfig,
    channel: Arc<EventChannel<StorefrontEvent>>,
    catalog: CatalogClient,
    carts: CartClient,
    product_id: ProductId,
    cart_id: CartId,
    form: ReviewForm,
    list: ReviewList,
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Starts the actors and builds the page for `product`.
    ///
    /// The review list subscribes before anything else exists, so no submission can be
    /// published ahead of it.
    pub async fn start(
        config: StorefrontConfig,
        product: ProductCreate,
    ) -> Result<Self, StorefrontError> {
        let channel = Arc::new(EventChannel::new());
        let list = ReviewList::mount(channel.clone());

        let (catalog_actor, catalog) = catalog_actor::new(config.channel_buffer);
        let (cart_actor, carts) = cart_actor::new(config.channel_buffer);

        let context = CatalogContext {
            premium: config.premium,
        };
        let handles = vec![
            tokio::spawn(catalog_actor.run(context)),
            tokio::spawn(cart_actor.run(())),
        ];

        let product_id = catalog.create_product(product).await?;
        let cart_id = carts.open_cart().await?;
        let form = ReviewForm::new(channel.clone());

        info!(%product_id, %cart_id, premium = config.premium, "Storefront started");

        Ok(Self {
            config,
            channel,
            catalog,
            carts,
            product_id,
            cart_id,
            form,
            list,
            handles,
        })
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The page's channel, for regions that want to follow `"cart-updated"` or
    /// `"review-submitted"`.
    pub fn events(&self) -> Arc<EventChannel<StorefrontEvent>> {
        self.channel.clone()
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn cart_id(&self) -> &CartId {
        &self.cart_id
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Snapshot of the product, including its detail bullets and variants.
    pub async fn product(&self) -> Result<Product, StorefrontError> {
        self.catalog
            .get(self.product_id.clone())
            .await?
            .ok_or_else(|| CatalogError::NotFound(self.product_id.to_string()).into())
    }

    pub async fn derived_view(&self) -> Result<DerivedView, StorefrontError> {
        Ok(self.catalog.derived_view(self.product_id.clone()).await?)
    }

    pub async fn current_variant(&self) -> Result<Variant, StorefrontError> {
        Ok(self.catalog.current_variant(self.product_id.clone()).await?)
    }

    /// Selects the variant at `index` and returns the view it produces.
    pub async fn select_variant(&self, index: usize) -> Result<DerivedView, StorefrontError> {
        let product = self
            .catalog
            .select_variant(self.product_id.clone(), index)
            .await?;
        Ok(product.derived_view(self.config.premium))
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of the selected variant. Returns how many units of it are queued.
    ///
    /// # Errors
    /// [`StorefrontError::OutOfStock`] when the selected variant has no stock.
    pub async fn add_to_cart(&self) -> Result<usize, StorefrontError> {
        let variant_id = self.stocked_variant().await?;
        let count = self.carts.add(self.cart_id.clone(), variant_id).await?;
        self.announce_cart(variant_id, count)?;
        Ok(count)
    }

    /// Removes one unit of the selected variant. `Ok(false)` if none was queued.
    ///
    /// # Errors
    /// [`StorefrontError::OutOfStock`] when the selected variant has no stock.
    pub async fn remove_from_cart(&self) -> Result<bool, StorefrontError> {
        let variant_id = self.stocked_variant().await?;
        let removed = self.carts.remove(self.cart_id.clone(), variant_id).await?;
        if removed {
            let count = self.carts.count(self.cart_id.clone(), variant_id).await?;
            self.announce_cart(variant_id, count)?;
        }
        Ok(removed)
    }

    pub async fn cart_count(&self, variant_id: VariantId) -> Result<usize, StorefrontError> {
        Ok(self.carts.count(self.cart_id.clone(), variant_id).await?)
    }

    pub async fn cart_contents(&self) -> Result<Vec<VariantId>, StorefrontError> {
        Ok(self.carts.contents(self.cart_id.clone()).await?)
    }

    async fn stocked_variant(&self) -> Result<VariantId, StorefrontError> {
        let variant = self.current_variant().await?;
        if !variant.in_stock() {
            warn!(variant_id = %variant.id, quantity = variant.quantity, "Cart change refused");
            return Err(StorefrontError::OutOfStock(variant.id));
        }
        Ok(variant.id)
    }

    fn announce_cart(&self, variant_id: VariantId, count: usize) -> Result<(), StorefrontError> {
        self.channel
            .publish(CART_UPDATED, &StorefrontEvent::CartUpdated { variant_id, count })?;
        Ok(())
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    pub fn update_draft_field(&mut self, update: DraftUpdate) {
        self.form.update_field(update);
    }

    /// Submits the draft. A rejection is an expected outcome: the messages are also
    /// available from [`validation_errors`](Self::validation_errors).
    pub fn submit_review(&mut self) -> Result<Review, ReviewError> {
        self.form.submit()
    }

    pub fn review_collection(&self) -> Vec<Review> {
        self.list.reviews()
    }

    pub fn has_reviews(&self) -> bool {
        !self.list.is_empty()
    }

    pub fn validation_errors(&self) -> &[String] {
        self.form.validation_errors()
    }

    pub fn draft_state(&self) -> DraftState {
        self.form.draft_state()
    }

    // =========================================================================
    // Shutdown
    // =========================================================================

    /// Stops both actors and waits for them.
    ///
    /// Dropping the clients closes the actors' request channels; each actor drains what
    /// is queued and exits. The review list unsubscribes as it is dropped.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        drop(self.catalog);
        drop(self.carts);
        drop(self.form);
        drop(self.list);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(StorefrontError::ActorTask(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
