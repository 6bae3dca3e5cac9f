//! Product type.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are read-only reference data. Carts and wishlists keep their own
/// copy of the fields so stored state stays readable without the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in currency units.
    pub price: f64,
    /// Catalog category.
    pub category: Category,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product with no image or description.
    pub fn new(id: u32, title: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            category,
            image: String::new(),
            description: String::new(),
        }
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the fields required of any product entering the system.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.get() == 0 {
            return Err(CommerceError::ValidationError(
                "product id must be positive".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has an empty title",
                self.id
            )));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CommerceError::ValidationError(format!(
                "product {} has invalid price {}",
                self.id, self.price
            )));
        }
        Ok(())
    }

    /// Unit price as [`Money`].
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }

    /// Case-insensitive match against title, description and category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.as_str().to_lowercase().contains(&query)
    }
}
