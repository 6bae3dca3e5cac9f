//! Wishlist commands.

use anyhow::Result;
use storefront_commerce::wishlist::WishlistStore;
use storefront_store::FileStore;

use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;

const WIDTHS: [usize; 4] = [4, 32, 14, 12];

/// Run the wishlist command.
pub async fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let mut wishlist = ctx.wishlist()?;

    match args.command {
        Some(WishlistCommand::Show) | None => show_wishlist(&wishlist, ctx),
        Some(WishlistCommand::Add { id }) => {
            let product = ctx.product(id)?;
            if wishlist.add(product)? {
                report(&wishlist, &format!("Liked {}", product.title), ctx)
            } else {
                report(&wishlist, &format!("{} is already liked", product.title), ctx)
            }
        }
        Some(WishlistCommand::Remove { id }) => {
            let product = ctx.product(id)?;
            if wishlist.remove(product)? {
                report(&wishlist, &format!("Unliked {}", product.title), ctx)
            } else {
                report(&wishlist, &format!("{} is not liked", product.title), ctx)
            }
        }
        Some(WishlistCommand::Toggle { id }) => {
            let product = ctx.product(id)?;
            let msg = if wishlist.toggle(product)? {
                format!("Liked {}", product.title)
            } else {
                format!("Unliked {}", product.title)
            };
            report(&wishlist, &msg, ctx)
        }
        Some(WishlistCommand::Clear) => {
            wishlist.clear()?;
            report(&wishlist, "Wishlist cleared", ctx)
        }
        Some(WishlistCommand::Contains { id }) => {
            let product = ctx.product(id)?;
            let liked = wishlist.is_member(product.id);
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "id": product.id, "liked": liked }));
            } else if liked {
                ctx.output.success(&format!("{} is liked", product.title));
            } else {
                ctx.output.info(&format!("{} is not liked", product.title));
            }
            Ok(())
        }
    }
}

fn show_wishlist(wishlist: &WishlistStore<FileStore>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(wishlist.state());
        return Ok(());
    }

    ctx.output.header("Wishlist");
    if wishlist.is_empty() {
        ctx.output.info("Your wishlist is empty.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &WIDTHS);
    for product in wishlist.items() {
        let id = product.id.to_string();
        let price = ctx.price(product.price);
        ctx.output.table_row(
            &[&id, &product.title, product.category.as_str(), &price],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} liked product(s)", wishlist.total_items()));
    Ok(())
}

fn report(wishlist: &WishlistStore<FileStore>, msg: &str, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(wishlist.state());
        return Ok(());
    }
    ctx.output.success(msg);
    ctx.output.kv("wishlist", &format!("{} product(s)", wishlist.total_items()));
    Ok(())
}
