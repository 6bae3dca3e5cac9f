//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod reviews;
pub mod wishlist;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products.
    List {
        /// Only show this category.
        #[arg(short, long)]
        category: Option<String>,

        /// Only show products matching this text.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a product with related products.
    Show {
        /// Product ID.
        id: u32,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add one unit of a product.
    Add {
        /// Product ID.
        id: u32,
    },
    /// Remove one unit of a product.
    Remove {
        /// Product ID.
        id: u32,
    },
    /// Remove a product line entirely.
    Delete {
        /// Product ID.
        id: u32,
    },
    /// Set the quantity of a product already in the cart.
    Set {
        /// Product ID.
        id: u32,
        /// New quantity; values below 1 are ignored.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Place the order and empty the cart.
    Checkout {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Show liked products.
    Show,
    /// Like a product.
    Add {
        /// Product ID.
        id: u32,
    },
    /// Unlike a product.
    Remove {
        /// Product ID.
        id: u32,
    },
    /// Flip whether a product is liked.
    Toggle {
        /// Product ID.
        id: u32,
    },
    /// Unlike everything.
    Clear,
    /// Check whether a product is liked.
    Contains {
        /// Product ID.
        id: u32,
    },
}

/// Arguments for the reviews command.
#[derive(Args)]
pub struct ReviewsArgs {
    #[command(subcommand)]
    pub command: Option<ReviewsCommand>,
}

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// List review summaries.
    List {
        /// Bypass the review cache.
        #[arg(short, long)]
        refresh: bool,
    },
    /// Show the review summary of a product.
    Show {
        /// Product ID.
        id: u32,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
