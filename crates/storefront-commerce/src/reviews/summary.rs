//! Review summary data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Tone of a summarized review point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// One pro or con pulled out of the reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    #[serde(rename = "type")]
    pub sentiment: Sentiment,
    pub text: String,
}

/// AI-generated summary of a product's reviews across sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// The reviewed product.
    pub id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub product_image: String,
    /// Mean rating on a 0-5 scale.
    pub average_rating: f32,
    pub total_reviews: u32,
    /// Where the reviews were collected (e.g. "Amazon").
    #[serde(default)]
    pub sources: Vec<String>,
    pub ai_summary: String,
    #[serde(default)]
    pub key_points: Vec<KeyPoint>,
    pub last_updated: NaiveDate,
}

impl ReviewSummary {
    /// Points with the given sentiment, in order.
    pub fn points(&self, sentiment: Sentiment) -> impl Iterator<Item = &KeyPoint> {
        self.key_points
            .iter()
            .filter(move |p| p.sentiment == sentiment)
    }

    /// Render the average rating as five stars, rounded to the nearest star.
    pub fn render_stars(&self) -> String {
        let filled = self.average_rating.clamp(0.0, 5.0).round() as usize;
        let empty = 5 - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}
