//! Review summaries.
//!
//! Summaries come from a [`ReviewService`] and are cached by a
//! [`ReviewStore`] for a fixed time window, across runs when backed by
//! durable storage.

mod service;
mod store;
mod summary;

pub use service::{MockReviewService, ReviewService, DEFAULT_MOCK_DELAY};
pub use store::{Clock, ReviewStore, SystemClock, DEFAULT_CACHE_TTL, LOAD_ERROR_MESSAGE, REVIEWS_KEY};
pub use summary::{KeyPoint, ReviewSummary, Sentiment};
