//! End-to-end cart and wishlist scenarios against the bundled catalog.

use storefront_commerce::cart::{CART_KEY, CHECKOUT_MESSAGE};
use storefront_commerce::prelude::*;
use storefront_commerce::wishlist::WISHLIST_KEY;
use storefront_store::{FileStore, KeyValueStore, MemoryStore};

fn product(catalog: &Catalog, id: u32) -> Product {
    catalog.get(ProductId::new(id)).unwrap().clone()
}

#[test]
fn test_cart_scenario_totals() {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = CartStore::open(MemoryStore::new());

    cart.add_item(&product(&catalog, 1)).unwrap();
    cart.add_item(&product(&catalog, 2)).unwrap();
    cart.add_item(&product(&catalog, 1)).unwrap();

    let lines: Vec<(u32, u32)> = cart
        .items()
        .iter()
        .map(|l| (l.id().get(), l.quantity))
        .collect();
    assert_eq!(lines, vec![(1, 2), (2, 1)]);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_amount(), 6797.0);
    assert_eq!(
        cart.state().total_in(Currency::INR).unwrap().display(),
        "₹6797.00"
    );
}

#[test]
fn test_wishlist_toggle_scenario() {
    let catalog = Catalog::builtin().unwrap();
    let knife = product(&catalog, 5);
    let mut wishlist = WishlistStore::open(MemoryStore::new());

    assert!(wishlist.toggle(&knife).unwrap());
    assert!(wishlist.is_member(knife.id));
    assert!(!wishlist.toggle(&knife).unwrap());
    assert!(!wishlist.is_member(knife.id));
}

#[test]
fn test_checkout_receipt() {
    let catalog = Catalog::builtin().unwrap();
    let store = MemoryStore::new();
    let mut cart = CartStore::open(store.clone());
    cart.add_item(&product(&catalog, 8)).unwrap();
    cart.update_quantity(ProductId::new(8), 2).unwrap();

    let receipt = cart.checkout().unwrap();
    assert_eq!(receipt.message, CHECKOUT_MESSAGE);
    assert_eq!(receipt.total_items, 2);
    assert_eq!(receipt.total_amount, 6998.0);

    assert!(cart.is_empty());
    assert_eq!(cart.total_amount(), 0.0);
    assert!(CartStore::open(store).is_empty());
}

#[test]
fn test_checkout_of_empty_cart() {
    let mut cart = CartStore::open(MemoryStore::new());
    let receipt = cart.checkout().unwrap();
    assert_eq!(receipt.total_items, 0);
    assert!(cart.is_empty());
}

#[test]
fn test_cart_and_wishlist_share_storage() {
    let catalog = Catalog::builtin().unwrap();
    let store = MemoryStore::new();
    let mut cart = CartStore::open(store.clone());
    let mut wishlist = WishlistStore::open(store.clone());

    cart.add_item(&product(&catalog, 3)).unwrap();
    wishlist.add(&product(&catalog, 4)).unwrap();

    let mut keys = store.keys().unwrap();
    keys.sort();
    assert_eq!(keys, vec![CART_KEY.to_string(), WISHLIST_KEY.to_string()]);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::open(&store);
        let mut wishlist = WishlistStore::open(&store);
        cart.add_item(&product(&catalog, 6)).unwrap();
        cart.add_item(&product(&catalog, 6)).unwrap();
        cart.add_item(&product(&catalog, 7)).unwrap();
        wishlist.toggle(&product(&catalog, 2)).unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::open(&store);
    let wishlist = WishlistStore::open(&store);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_amount(), 1199.0 * 2.0 + 1759.0);
    assert!(wishlist.is_member(ProductId::new(2)));
    assert_eq!(wishlist.total_items(), 1);
}

#[test]
fn test_corrupt_storage_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.set(CART_KEY, b"{not json").unwrap();
    store
        .set(WISHLIST_KEY, br#"{"items": [{"id": 1}], "totalItems": 1}"#)
        .unwrap();

    assert!(CartStore::open(&store).is_empty());
    assert!(WishlistStore::open(&store).is_empty());
}

#[test]
fn test_stored_totals_are_recomputed() {
    let store = MemoryStore::new();
    let json = r#"{
        "items": [
            {"id": 1, "title": "Wireless Bluetooth Headphones", "price": 2499,
             "category": "Electronics", "quantity": 2}
        ],
        "totalItems": 99,
        "totalAmount": 1.5
    }"#;
    store.set(CART_KEY, json.as_bytes()).unwrap();

    let cart = CartStore::open(store);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_amount(), 4998.0);
}

#[test]
fn test_invalid_products_never_reach_storage() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let mut cart = CartStore::open(&store);
    cart.add_item(&product(&catalog, 1)).unwrap();
    let free = Product::new(42, "Gift card", 0.0, Category::Electronics);
    assert!(cart.add_item(&free).is_err());

    let mut wishlist = WishlistStore::open(&store);
    wishlist.add(&product(&catalog, 3)).unwrap();
    let untitled = Product::new(43, "", 10.0, Category::Clothing);
    assert!(wishlist.toggle(&untitled).is_err());

    let cart_after = CartStore::open(&store);
    let wishlist_after = WishlistStore::open(&store);
    assert_eq!(cart_after.state(), cart.state());
    assert_eq!(cart_after.items().len(), 1);
    assert_eq!(wishlist_after.state(), wishlist.state());
    assert_eq!(wishlist_after.total_items(), 1);
}
