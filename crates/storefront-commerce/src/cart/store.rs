//! The persisted cart store.

use serde::Serialize;
use storefront_store::KeyValueStore;

use crate::cart::{CartAction, CartLine, CartState};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::persist::Persisted;

/// Storage key for the cart.
pub const CART_KEY: &str = "cart";

/// Message shown to the shopper after checkout.
pub const CHECKOUT_MESSAGE: &str = "Checkout successful! Thank you for your order.";

/// Outcome of a checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    /// Confirmation for the shopper.
    pub message: String,
    /// Items in the cart at checkout.
    pub total_items: u32,
    /// Cart total at checkout.
    pub total_amount: f64,
}

/// The shopping cart, mirrored to storage on every change.
///
/// Mutating methods return `Ok(true)` when the cart changed and was written,
/// `Ok(false)` for a no-op (nothing is written), and an error only when the
/// write itself failed, in which case the cart is left as it was.
#[derive(Debug)]
pub struct CartStore<S> {
    state: Persisted<S, CartState>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart from `store`, starting empty if nothing usable is stored.
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, CART_KEY)
    }

    /// Load the cart kept under a custom key.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            state: Persisted::load(store, key),
        }
    }

    /// Apply an action and persist the result if it changed anything.
    ///
    /// Products entering the cart are validated first, so an invalid
    /// product can never make the stored cart undecodable.
    pub fn dispatch(&mut self, action: CartAction) -> Result<bool, CommerceError> {
        if let CartAction::AddItem(product) = &action {
            product.validate()?;
        }
        match self.state.get().apply(&action) {
            Some(next) => {
                tracing::debug!(
                    ?action,
                    total_items = next.total_items(),
                    total_amount = next.total_amount(),
                    "cart updated"
                );
                self.state.replace(next)?;
                Ok(true)
            }
            None => {
                tracing::trace!(?action, "cart unchanged");
                Ok(false)
            }
        }
    }

    /// Add one unit of `product`.
    pub fn add_item(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.dispatch(CartAction::AddItem(product.clone()))
    }

    /// Remove one unit of `product`, dropping its line at zero.
    pub fn remove_item(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.dispatch(CartAction::RemoveItem(product.id))
    }

    /// Drop the line for `product` whatever its quantity.
    pub fn delete_item(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.dispatch(CartAction::DeleteItem(product.id))
    }

    /// Set the quantity of a line. Quantities below 1 are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<bool, CommerceError> {
        self.dispatch(CartAction::UpdateQuantity { id, quantity })
    }

    /// Place the order: empties the cart and returns a receipt.
    ///
    /// There is no payment step, so this succeeds for any cart, including
    /// an empty one.
    pub fn checkout(&mut self) -> Result<CheckoutReceipt, CommerceError> {
        let receipt = CheckoutReceipt {
            message: CHECKOUT_MESSAGE.to_string(),
            total_items: self.total_items(),
            total_amount: self.total_amount(),
        };
        self.dispatch(CartAction::Clear)?;
        tracing::info!(
            total_items = receipt.total_items,
            total_amount = receipt.total_amount,
            "checkout complete"
        );
        Ok(receipt)
    }

    /// Re-read the cart from storage.
    pub fn reload(&mut self) {
        self.state.reload();
    }

    /// The full cart state.
    pub fn state(&self) -> &CartState {
        self.state.get()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        self.state().items()
    }

    /// The line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.state().line(id)
    }

    pub fn total_items(&self) -> u32 {
        self.state().total_items()
    }

    pub fn total_amount(&self) -> f64 {
        self.state().total_amount()
    }

    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.state.store()
    }
}
