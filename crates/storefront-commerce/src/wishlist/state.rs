//! Wishlist state and reducer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A state transition on the wishlist.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Insert a product if it is not already liked.
    Add(Product),
    /// Remove a product if present.
    Remove(ProductId),
    /// Flip a product's membership.
    Toggle(Product),
    /// Remove everything.
    Clear,
}

/// Liked products, unique by id, in the order they were added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredWishlist")]
pub struct WishlistState {
    items: Vec<Product>,
    total_items: u32,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from products, rejecting duplicates.
    pub fn from_products(items: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for product in &items {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self::with_count(items))
    }

    fn with_count(items: Vec<Product>) -> Self {
        let total_items = u32::try_from(items.len()).unwrap_or(u32::MAX);
        Self { items, total_items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a product is liked.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Compute the state after `action`.
    ///
    /// Returns `None` when the action leaves the wishlist unchanged.
    pub fn apply(&self, action: &WishlistAction) -> Option<WishlistState> {
        match action {
            WishlistAction::Add(product) => self.add(product),
            WishlistAction::Remove(id) => self.remove(*id),
            WishlistAction::Toggle(product) => self
                .remove(product.id)
                .or_else(|| self.add(product)),
            WishlistAction::Clear => {
                if self.is_empty() {
                    None
                } else {
                    Some(Self::new())
                }
            }
        }
    }

    fn add(&self, product: &Product) -> Option<WishlistState> {
        if self.contains(product.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(product.clone());
        Some(Self::with_count(items))
    }

    fn remove(&self, id: ProductId) -> Option<WishlistState> {
        if !self.contains(id) {
            return None;
        }
        let items = self.items.iter().filter(|p| p.id != id).cloned().collect();
        Some(Self::with_count(items))
    }
}

/// Wishlist as written to storage. The stored count is ignored on read.
#[derive(Deserialize)]
struct StoredWishlist {
    #[serde(default)]
    items: Vec<Product>,
}

impl TryFrom<StoredWishlist> for WishlistState {
    type Error = CommerceError;

    fn try_from(stored: StoredWishlist) -> Result<Self, Self::Error> {
        WishlistState::from_products(stored.items)
    }
}
