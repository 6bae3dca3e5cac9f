//! Catalog commands.

use anyhow::Result;
use storefront_commerce::catalog::{Category, Product, RELATED_PRODUCTS_LIMIT};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::liked_badge;

const WIDTHS: [usize; 5] = [4, 32, 14, 12, 2];

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CatalogCommand::List { category, search }) => {
            list_products(category.as_deref(), search.as_deref(), ctx).await
        }
        None => list_products(None, None, ctx).await,
        Some(CatalogCommand::Show { id }) => show_product(id, ctx).await,
    }
}

async fn list_products(category: Option<&str>, search: Option<&str>, ctx: &Context) -> Result<()> {
    let category: Option<Category> = category.map(str::parse).transpose()?;

    let mut products: Vec<&Product> = match category {
        Some(category) => ctx.catalog.by_category(category).collect(),
        None => ctx.catalog.all().iter().collect(),
    };
    if let Some(query) = search {
        products.retain(|p| p.matches(query));
    }

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");
    if products.is_empty() {
        let categories: Vec<&str> = ctx.catalog.categories().iter().map(Category::as_str).collect();
        ctx.output.info("No products match.");
        ctx.output.kv("categories", &categories.join(", "));
        return Ok(());
    }

    let wishlist = ctx.wishlist()?;
    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE", ""], &WIDTHS);
    for product in &products {
        let id = product.id.to_string();
        let price = ctx.price(product.price);
        let liked = liked_badge(wishlist.is_member(product.id));
        ctx.output.table_row(
            &[&id, &product.title, product.category.as_str(), &price, &liked],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", products.len()));
    Ok(())
}

async fn show_product(id: u32, ctx: &Context) -> Result<()> {
    let product = ctx.product(id)?;
    let related = ctx.catalog.related(product, RELATED_PRODUCTS_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "related": related,
        }));
        return Ok(());
    }

    let wishlist = ctx.wishlist()?;
    let cart = ctx.cart()?;

    ctx.output.header(&product.title);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("category", product.category.as_str());
    ctx.output.kv("price", &ctx.price(product.price));
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }
    ctx.output.kv("liked", &liked_badge(wishlist.is_member(product.id)));
    if let Some(line) = cart.line(product.id) {
        ctx.output.kv("in cart", &line.quantity.to_string());
    }

    if !related.is_empty() {
        ctx.output.header("Related products");
        for other in related {
            ctx.output.list_item(&format!(
                "{} {} ({})",
                other.id,
                other.title,
                ctx.price(other.price)
            ));
        }
    }

    Ok(())
}
