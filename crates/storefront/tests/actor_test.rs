use storefront::catalog_actor::{self, CatalogContext, CatalogError};
use storefront::cart_actor::{self, CartError};
use storefront::model::{CartId, ProductCreate, ProductId, VariantId};
use storefront_framework::ActorClient;

const GREEN: VariantId = VariantId(2234);
const BLUE: VariantId = VariantId(2235);

/// Real catalog actor: ids, selection and the premium context all flow through it.
#[tokio::test]
async fn test_catalog_actor_round_trip() {
    let (actor, catalog) = catalog_actor::new(8);
    let handle = tokio::spawn(actor.run(CatalogContext { premium: true }));

    let id = catalog.create_product(ProductCreate::socks()).await.unwrap();
    assert_eq!(id, ProductId(1));
    assert_eq!(id.to_string(), "product_1");

    let product = catalog.select_variant(id.clone(), 1).await.unwrap();
    assert_eq!(product.current_variant_id(), BLUE);

    let view = catalog.derived_view(id.clone()).await.unwrap();
    assert_eq!(view.image, "blueSocks.jpg");
    assert_eq!(view.shipping.cost(), 0.0);

    let stored = catalog.get(id.clone()).await.unwrap().expect("Product not found");
    assert_eq!(stored.selected_index(), 1);

    drop(catalog);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_catalog_actor_rejects_bad_input() {
    let (actor, catalog) = catalog_actor::new(8);
    let handle = tokio::spawn(actor.run(CatalogContext::default()));

    let mut empty = ProductCreate::socks();
    empty.variants.clear();
    assert_eq!(
        catalog.create_product(empty).await,
        Err(CatalogError::NoVariants)
    );

    let id = catalog.create_product(ProductCreate::socks()).await.unwrap();
    assert_eq!(
        catalog.select_variant(id.clone(), 9).await.unwrap_err(),
        CatalogError::OutOfRange { index: 9, len: 2 }
    );
    assert_eq!(catalog.current_variant(id).await.unwrap().id, GREEN);

    assert_eq!(
        catalog.derived_view(ProductId(42)).await,
        Err(CatalogError::NotFound("product_42".into()))
    );

    drop(catalog);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cart_actor_ledger_operations() {
    let (actor, carts) = cart_actor::new(8);
    let handle = tokio::spawn(actor.run(()));

    let cart = carts.open_cart().await.unwrap();
    assert_eq!(cart, CartId(1));

    assert_eq!(carts.add(cart.clone(), GREEN).await.unwrap(), 1);
    assert_eq!(carts.add(cart.clone(), BLUE).await.unwrap(), 1);
    assert_eq!(carts.add(cart.clone(), GREEN).await.unwrap(), 2);

    assert!(carts.remove(cart.clone(), GREEN).await.unwrap());
    assert!(!carts.remove(cart.clone(), VariantId(1)).await.unwrap());
    assert_eq!(carts.contents(cart.clone()).await.unwrap(), vec![BLUE, GREEN]);
    assert_eq!(carts.count(cart.clone(), GREEN).await.unwrap(), 1);

    assert_eq!(
        carts.count(CartId(7), GREEN).await,
        Err(CartError::NotFound("cart_7".into()))
    );

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_cart_mutations_are_serialized() {
    let (actor, carts) = cart_actor::new(4);
    let handle = tokio::spawn(actor.run(()));
    let cart = carts.open_cart().await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..50 {
        let carts = carts.clone();
        let cart = cart.clone();
        tasks.push(tokio::spawn(async move {
            let variant = if i % 2 == 0 { GREEN } else { BLUE };
            carts.add(cart, variant).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(carts.count(cart.clone(), GREEN).await.unwrap(), 25);
    assert_eq!(carts.count(cart.clone(), BLUE).await.unwrap(), 25);
    assert_eq!(carts.contents(cart).await.unwrap().len(), 50);

    drop(carts);
    handle.await.unwrap();
}
