//! Product catalog module.
//!
//! Contains the product record, categories, and the read-only catalog.

mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, RELATED_PRODUCTS_LIMIT};
pub use category::Category;
pub use product::Product;
