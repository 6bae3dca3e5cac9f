//! The persisted wishlist store.

use storefront_store::KeyValueStore;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::persist::Persisted;
use crate::wishlist::{WishlistAction, WishlistState};

/// Storage key for the wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// The wishlist, mirrored to storage on every change.
///
/// Same contract as the cart store: `Ok(true)` when changed and written,
/// `Ok(false)` for a no-op, an error only when the write failed.
#[derive(Debug)]
pub struct WishlistStore<S> {
    state: Persisted<S, WishlistState>,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Load the wishlist from `store`, starting empty if nothing usable is stored.
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, WISHLIST_KEY)
    }

    /// Load the wishlist kept under a custom key.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            state: Persisted::load(store, key),
        }
    }

    /// Apply an action and persist the result if it changed anything.
    ///
    /// Products entering the wishlist are validated first.
    pub fn dispatch(&mut self, action: WishlistAction) -> Result<bool, CommerceError> {
        if let WishlistAction::Add(product) | WishlistAction::Toggle(product) = &action {
            product.validate()?;
        }
        let Some(next) = self.state.get().apply(&action) else {
            tracing::trace!(?action, "wishlist unchanged");
            return Ok(false);
        };
        tracing::debug!(?action, total_items = next.total_items(), "wishlist updated");
        self.state.replace(next)?;
        Ok(true)
    }

    pub fn add(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.dispatch(WishlistAction::Add(product.clone()))
    }

    pub fn remove(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.dispatch(WishlistAction::Remove(product.id))
    }

    /// Flip membership of `product`. Returns whether it is now liked.
    pub fn toggle(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.dispatch(WishlistAction::Toggle(product.clone()))?;
        Ok(self.is_member(product.id))
    }

    pub fn clear(&mut self) -> Result<bool, CommerceError> {
        self.dispatch(WishlistAction::Clear)
    }

    /// Check if a product is liked.
    pub fn is_member(&self, id: ProductId) -> bool {
        self.state().contains(id)
    }

    /// Re-read the wishlist from storage.
    pub fn reload(&mut self) {
        self.state.reload();
    }

    pub fn state(&self) -> &WishlistState {
        self.state.get()
    }

    /// Liked products in the order they were added.
    pub fn items(&self) -> &[Product] {
        self.state().items()
    }

    pub fn total_items(&self) -> u32 {
        self.state().total_items()
    }

    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use storefront_store::MemoryStore;

    fn shoes() -> Product {
        Product::new(8, "Comfortable Running Shoes", 3499.0, Category::Footwear)
    }

    #[test]
    fn test_toggle_reports_membership() {
        let mut wishlist = WishlistStore::open(MemoryStore::new());
        assert!(wishlist.toggle(&shoes()).unwrap());
        assert!(wishlist.is_member(ProductId::new(8)));
        assert!(!wishlist.toggle(&shoes()).unwrap());
        assert!(!wishlist.is_member(ProductId::new(8)));
    }

    #[test]
    fn test_changes_are_persisted() {
        let store = MemoryStore::new();
        let mut wishlist = WishlistStore::open(store.clone());
        wishlist.add(&shoes()).unwrap();

        let reopened = WishlistStore::open(store);
        assert_eq!(reopened.items(), wishlist.items());
        assert_eq!(reopened.total_items(), 1);
    }

    #[test]
    fn test_invalid_product_is_rejected() {
        let store = MemoryStore::new();
        let mut wishlist = WishlistStore::open(store.clone());
        wishlist.add(&shoes()).unwrap();

        let untitled = Product::new(9, "", 499.0, Category::Footwear);
        assert!(matches!(
            wishlist.add(&untitled),
            Err(CommerceError::ValidationError(_))
        ));
        assert!(wishlist.toggle(&untitled).is_err());
        let zero_id = Product::new(0, "Socks", 199.0, Category::Footwear);
        assert!(wishlist.add(&zero_id).is_err());

        assert_eq!(wishlist.total_items(), 1);
        let reopened = WishlistStore::open(store);
        assert_eq!(reopened.items(), wishlist.items());
        assert!(reopened.is_member(ProductId::new(8)));
    }

    #[test]
    fn test_noops_do_not_write() {
        let store = MemoryStore::new();
        let mut wishlist = WishlistStore::open(store.clone());
        assert!(!wishlist.remove(&shoes()).unwrap());
        assert!(!wishlist.clear().unwrap());
        assert!(!store.exists(WISHLIST_KEY).unwrap());

        wishlist.add(&shoes()).unwrap();
        store.delete(WISHLIST_KEY).unwrap();
        assert!(!wishlist.add(&shoes()).unwrap());
        assert!(!store.exists(WISHLIST_KEY).unwrap());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        let mut wishlist = WishlistStore::open(store.clone());
        wishlist.add(&shoes()).unwrap();
        assert!(wishlist.clear().unwrap());
        assert!(wishlist.is_empty());
        assert!(WishlistStore::open(store).is_empty());
    }
}
