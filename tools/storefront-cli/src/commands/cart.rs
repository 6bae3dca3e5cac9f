//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use storefront_commerce::cart::CartStore;
use storefront_commerce::ProductId;
use storefront_store::FileStore;

use super::{CartArgs, CartCommand};
use crate::context::Context;

const WIDTHS: [usize; 5] = [4, 32, 12, 5, 12];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;

    match args.command {
        Some(CartCommand::Show) | None => show_cart(&cart, ctx),
        Some(CartCommand::Add { id }) => {
            let product = ctx.product(id)?;
            if cart.add_item(product)? {
                report(&cart, &format!("Added {}", product.title), ctx)
            } else {
                unchanged(&cart, &format!("Cannot add more {}", product.title), ctx)
            }
        }
        Some(CartCommand::Remove { id }) => {
            let product = ctx.product(id)?;
            if cart.remove_item(product)? {
                report(&cart, &format!("Removed one {}", product.title), ctx)
            } else {
                unchanged(&cart, &format!("{} is not in the cart", product.title), ctx)
            }
        }
        Some(CartCommand::Delete { id }) => {
            let product = ctx.product(id)?;
            if cart.delete_item(product)? {
                report(&cart, &format!("Removed {}", product.title), ctx)
            } else {
                unchanged(&cart, &format!("{} is not in the cart", product.title), ctx)
            }
        }
        Some(CartCommand::Set { id, quantity }) => set_quantity(&mut cart, id, quantity, ctx),
        Some(CartCommand::Checkout { yes }) => checkout(&mut cart, yes, ctx),
    }
}

fn show_cart(cart: &CartStore<FileStore>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(cart.state());
        return Ok(());
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "TITLE", "PRICE", "QTY", "SUBTOTAL"], &WIDTHS);
    for line in cart.items() {
        let id = line.id().to_string();
        let price = ctx.price(line.product.price);
        let quantity = line.quantity.to_string();
        let subtotal = ctx.price(line.line_total());
        ctx.output.table_row(
            &[&id, &line.product.title, &price, &quantity, &subtotal],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.kv("items", &cart.total_items().to_string());
    ctx.output.kv("total", &ctx.price(cart.total_amount()));
    Ok(())
}

fn set_quantity(cart: &mut CartStore<FileStore>, id: u32, quantity: i64, ctx: &Context) -> Result<()> {
    let product = ctx.product(id)?;
    if quantity < 1 {
        return unchanged(cart, "Quantity must be at least 1", ctx);
    }
    if cart.line(product.id).is_none() {
        return unchanged(cart, &format!("{} is not in the cart", product.title), ctx);
    }

    if cart.update_quantity(ProductId::new(id), quantity)? {
        report(cart, &format!("{} quantity set to {}", product.title, quantity), ctx)
    } else {
        unchanged(cart, &format!("{} quantity unchanged", product.title), ctx)
    }
}

fn checkout(cart: &mut CartStore<FileStore>, yes: bool, ctx: &Context) -> Result<()> {
    if !yes && !ctx.output.is_json() && !cart.is_empty() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Place order for {} item(s), {}?",
                cart.total_items(),
                ctx.price(cart.total_amount())
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    let receipt = cart.checkout()?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.success(&receipt.message);
    ctx.output.kv("items", &receipt.total_items.to_string());
    ctx.output.kv("total", &ctx.price(receipt.total_amount));
    Ok(())
}

fn report(cart: &CartStore<FileStore>, msg: &str, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(cart.state());
        return Ok(());
    }
    ctx.output.success(msg);
    summary(cart, ctx);
    Ok(())
}

fn unchanged(cart: &CartStore<FileStore>, msg: &str, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(cart.state());
        return Ok(());
    }
    ctx.output.warn(msg);
    summary(cart, ctx);
    Ok(())
}

fn summary(cart: &CartStore<FileStore>, ctx: &Context) {
    ctx.output.kv(
        "cart",
        &format!(
            "{} item(s), {}",
            cart.total_items(),
            ctx.price(cart.total_amount())
        ),
    );
}
