//! Wishlist module.
//!
//! A persisted membership set of liked products.

mod state;
mod store;

pub use state::{WishlistAction, WishlistState};
pub use store::{WishlistStore, WISHLIST_KEY};
