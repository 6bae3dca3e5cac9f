//! Shopping cart module.
//!
//! Contains the cart state and reducer, and the persisted cart store.

mod state;
mod store;

pub use state::{CartAction, CartLine, CartState};
pub use store::{CartStore, CheckoutReceipt, CART_KEY, CHECKOUT_MESSAGE};
