//! Review summary service.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ReviewError;
use crate::ids::ProductId;
use crate::reviews::ReviewSummary;

/// Simulated network delay of the bundled service.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

const BUILTIN_REVIEWS: &str = include_str!("../../data/reviews.json");

/// Source of AI review summaries.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Fetch summaries for every product.
    async fn fetch_reviews(&self) -> Result<Vec<ReviewSummary>, ReviewError>;

    /// Fetch the summary for one product.
    async fn fetch_review(&self, id: ProductId) -> Result<Option<ReviewSummary>, ReviewError> {
        let reviews = self.fetch_reviews().await?;
        Ok(reviews.into_iter().find(|r| r.id == id))
    }
}

/// Review service backed by bundled data and a simulated delay.
///
/// Can be switched into a failing mode to exercise error handling.
#[derive(Debug)]
pub struct MockReviewService {
    summaries: Vec<ReviewSummary>,
    delay: Duration,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl MockReviewService {
    /// Serve the given summaries.
    pub fn new(summaries: Vec<ReviewSummary>) -> Self {
        Self {
            summaries,
            delay: DEFAULT_MOCK_DELAY,
            failing: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Serve the summaries bundled with the crate.
    pub fn builtin() -> Result<Self, ReviewError> {
        let summaries: Vec<ReviewSummary> = serde_json::from_str(BUILTIN_REVIEWS)?;
        Ok(Self::new(summaries))
    }

    /// Set the simulated delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make subsequent fetches fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of fetches served so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewService for MockReviewService {
    async fn fetch_reviews(&self) -> Result<Vec<ReviewSummary>, ReviewError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(ReviewError::ServiceUnavailable(
                "simulated outage".to_string(),
            ));
        }
        Ok(self.summaries.clone())
    }
}
