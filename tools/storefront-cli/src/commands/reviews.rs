//! Review summary commands.

use anyhow::{bail, Result};
use chrono::Local;
use storefront_commerce::reviews::{ReviewSummary, Sentiment};
use storefront_commerce::ProductId;

use super::{ReviewsArgs, ReviewsCommand};
use crate::context::{Context, Reviews};
use crate::output::sentiment_badge;

const WIDTHS: [usize; 5] = [4, 32, 6, 8, 8];

/// Run the reviews command.
pub async fn run(args: ReviewsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.reviews()?;

    match args.command {
        Some(ReviewsCommand::List { refresh }) => list_reviews(&mut store, refresh, ctx).await,
        None => list_reviews(&mut store, false, ctx).await,
        Some(ReviewsCommand::Show { id }) => show_review(&mut store, id, ctx).await,
    }
}

/// Fetch summaries behind a spinner, surfacing the store's error message on failure.
async fn load(store: &mut Reviews, force: bool, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading review summaries...");
    let result = store.load_reviews(force).await.map(|reviews| reviews.len());
    spinner.finish_and_clear();

    match result {
        Ok(count) => {
            tracing::debug!(count, "review summaries ready");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "review fetch failed");
            let msg = store.error().unwrap_or("Failed to load product reviews.");
            bail!("{}", msg)
        }
    }
}

async fn list_reviews(store: &mut Reviews, refresh: bool, ctx: &Context) -> Result<()> {
    load(store, refresh, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&store.reviews());
        return Ok(());
    }

    ctx.output.header("Review summaries");
    ctx.output.table_row(&["ID", "PRODUCT", "RATING", "REVIEWS", "STARS"], &WIDTHS);
    for review in store.reviews() {
        let id = review.id.to_string();
        let rating = format!("{:.1}", review.average_rating);
        let count = review.total_reviews.to_string();
        let stars = review.render_stars();
        ctx.output.table_row(
            &[&id, &review.product_name, &rating, &count, &stars],
            &WIDTHS,
        );
    }

    if let Some(at) = store.last_fetched() {
        ctx.output.info("");
        ctx.output.info(&format!(
            "Fetched {}",
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }
    Ok(())
}

async fn show_review(store: &mut Reviews, id: u32, ctx: &Context) -> Result<()> {
    let product = ctx.product(id)?;
    load(store, false, ctx).await?;

    let Some(review) = store.get_review_by_id(ProductId::new(id)) else {
        bail!("No review summary for {}", product.title);
    };

    if ctx.output.is_json() {
        ctx.output.json(review);
        return Ok(());
    }

    print_review(review, ctx);
    Ok(())
}

fn print_review(review: &ReviewSummary, ctx: &Context) {
    ctx.output.header(&review.product_name);
    ctx.output.kv(
        "rating",
        &format!("{} {:.1} ({} reviews)", review.render_stars(), review.average_rating, review.total_reviews),
    );
    if !review.sources.is_empty() {
        ctx.output.kv("sources", &review.sources.join(", "));
    }
    let age = (Local::now().date_naive() - review.last_updated).num_days();
    ctx.output.kv(
        "updated",
        &format!("{} ({} days ago)", review.last_updated.format("%B %-d, %Y"), age),
    );

    ctx.output.header("AI summary");
    ctx.output.line(&review.ai_summary);

    for (title, sentiment) in [("Pros", Sentiment::Positive), ("Cons", Sentiment::Negative)] {
        let points: Vec<_> = review.points(sentiment).collect();
        if points.is_empty() {
            continue;
        }
        ctx.output.header(title);
        for point in points {
            ctx.output.line(&format!("{} {}", sentiment_badge(point.sentiment), point.text));
        }
    }
}
