//! Storefront domain types and state containers.
//!
//! This crate provides the client-side state of a small storefront:
//!
//! - **Catalog**: typed products, categories, lookup and related products
//! - **Cart**: line items with derived totals, persisted on every change
//! - **Wishlist**: a persisted membership set of liked products
//! - **Reviews**: AI review summaries behind an async service, cached
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//! use storefront_store::MemoryStore;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let headphones = catalog.get(ProductId::new(1)).unwrap().clone();
//!
//! // Stores are constructed once and handed to whatever needs them.
//! let storage = MemoryStore::new();
//! let mut cart = CartStore::open(storage.clone());
//! let mut wishlist = WishlistStore::open(storage);
//!
//! cart.add_item(&headphones).unwrap();
//! cart.add_item(&headphones).unwrap();
//! assert_eq!(cart.total_items(), 2);
//!
//! wishlist.toggle(&headphones).unwrap();
//! assert!(wishlist.is_member(headphones.id));
//!
//! let receipt = cart.checkout().unwrap();
//! assert_eq!(receipt.total_items, 2);
//! assert!(cart.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod persist;

pub mod cart;
pub mod catalog;
pub mod reviews;
pub mod wishlist;

pub use error::{CommerceError, ReviewError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, ReviewError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{CartAction, CartLine, CartState, CartStore, CheckoutReceipt};

    // Wishlist
    pub use crate::wishlist::{WishlistAction, WishlistState, WishlistStore};

    // Reviews
    pub use crate::reviews::{
        KeyPoint, MockReviewService, ReviewService, ReviewStore, ReviewSummary, Sentiment,
    };
}
