//! # Catalog Client
//!
//! High-level API for the catalog actor. Wraps a `ResourceClient<Product>` and turns
//! requests and results into page terms: select a variant, read the current one, read the
//! derived view.
use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError};
use crate::model::{DerivedView, Product, ProductCreate, ProductId, Variant, VariantSelection};
use async_trait::async_trait;
use storefront_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Entity errors come back as the [`CatalogError`] the product raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CatalogError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CatalogError::NotFound(id),
            Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!(variants = params.variants.len(), "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Moves the selection to `index` and returns the product as it now stands.
    ///
    /// # Errors
    /// [`CatalogError::OutOfRange`] leaves the selection where it was.
    #[instrument(skip(self))]
    pub async fn select_variant(&self, id: ProductId, index: usize) -> Result<Product, CatalogError> {
        debug!("Selecting variant");
        self.inner
            .update(id, VariantSelection { index })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn current_variant(&self, id: ProductId) -> Result<Variant, CatalogError> {
        match self
            .inner
            .perform_action(id, CatalogAction::CurrentVariant)
            .await
        {
            Ok(CatalogActionResult::CurrentVariant(variant)) => Ok(variant),
            Ok(other) => Err(CatalogError::UnexpectedResponse(format!("{other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn derived_view(&self, id: ProductId) -> Result<DerivedView, CatalogError> {
        match self.inner.perform_action(id, CatalogAction::DerivedView).await {
            Ok(CatalogActionResult::DerivedView(view)) => Ok(view),
            Ok(other) => Err(CatalogError::UnexpectedResponse(format!("{other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
