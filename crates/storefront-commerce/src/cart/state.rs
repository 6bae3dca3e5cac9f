//! Cart state, line items and the cart reducer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A line item in the cart.
///
/// Serialized with the product fields flattened next to `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product being purchased.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, never below 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product id.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    /// Line total as [`Money`].
    pub fn line_total_in(&self, currency: Currency) -> Option<Money> {
        self.product
            .price_in(currency)
            .try_multiply(i64::from(self.quantity))
    }
}

/// A state transition on the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem(Product),
    /// Remove one unit of a product, dropping the line at zero.
    RemoveItem(ProductId),
    /// Drop a product's line regardless of quantity.
    DeleteItem(ProductId),
    /// Set a line's quantity. Values below 1 are rejected.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

/// Cart contents with derived totals.
///
/// `total_items` and `total_amount` are always recomputed from `items`,
/// including when a state is decoded from storage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredCart")]
pub struct CartState {
    items: Vec<CartLine>,
    total_items: u32,
    total_amount: f64,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from lines, checking line invariants.
    pub fn from_lines(items: Vec<CartLine>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for line in &items {
            line.product.validate()?;
            if line.quantity < 1 {
                return Err(CommerceError::ValidationError(format!(
                    "cart line {} has quantity 0",
                    line.id()
                )));
            }
            if !seen.insert(line.id()) {
                return Err(CommerceError::DuplicateProduct(line.id()));
            }
        }
        Ok(Self::with_totals(items))
    }

    fn with_totals(items: Vec<CartLine>) -> Self {
        let total_items = items
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity));
        let total_amount = items.iter().map(CartLine::line_total).sum();
        Self {
            items,
            total_items,
            total_amount,
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of price times quantity.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Cart total as [`Money`].
    pub fn total_in(&self, currency: Currency) -> Option<Money> {
        self.items.iter().try_fold(Money::zero(currency), |acc, line| {
            acc.try_add(&line.line_total_in(currency)?)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| l.id() == id)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|l| l.id() == id)
    }

    /// Compute the state after `action`.
    ///
    /// Returns `None` when the action leaves the cart unchanged.
    pub fn apply(&self, action: &CartAction) -> Option<CartState> {
        match action {
            CartAction::AddItem(product) => self.add_item(product),
            CartAction::RemoveItem(id) => self.remove_item(*id),
            CartAction::DeleteItem(id) => self.delete_item(*id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(*id, *quantity),
            CartAction::Clear => self.clear(),
        }
    }

    fn add_item(&self, product: &Product) -> Option<CartState> {
        let mut items = self.items.clone();
        match self.position(product.id) {
            Some(index) => {
                let line = &mut items[index];
                line.quantity = line.quantity.checked_add(1)?;
            }
            None => items.push(CartLine::new(product.clone())),
        }
        Some(Self::with_totals(items))
    }

    fn remove_item(&self, id: ProductId) -> Option<CartState> {
        let index = self.position(id)?;
        let mut items = self.items.clone();
        if items[index].quantity <= 1 {
            items.remove(index);
        } else {
            items[index].quantity -= 1;
        }
        Some(Self::with_totals(items))
    }

    fn delete_item(&self, id: ProductId) -> Option<CartState> {
        let index = self.position(id)?;
        let mut items = self.items.clone();
        items.remove(index);
        Some(Self::with_totals(items))
    }

    fn update_quantity(&self, id: ProductId, quantity: i64) -> Option<CartState> {
        if quantity < 1 {
            return None;
        }
        let quantity = u32::try_from(quantity).ok()?;
        let index = self.position(id)?;
        if self.items[index].quantity == quantity {
            return None;
        }
        let mut items = self.items.clone();
        items[index].quantity = quantity;
        Some(Self::with_totals(items))
    }

    fn clear(&self) -> Option<CartState> {
        if self.is_empty() {
            return None;
        }
        Some(Self::new())
    }
}

/// Cart as written to storage. Stored totals are ignored on read.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLine>,
}

impl TryFrom<StoredCart> for CartState {
    type Error = CommerceError;

    fn try_from(stored: StoredCart) -> Result<Self, Self::Error> {
        CartState::from_lines(stored.items)
    }
}
