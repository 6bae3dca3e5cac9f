//! Cached review summaries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_store::{Cache, KeyValueStore};

use crate::error::ReviewError;
use crate::ids::ProductId;
use crate::reviews::{ReviewService, ReviewSummary};

/// How long fetched summaries stay fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Storage key for the review cache.
pub const REVIEWS_KEY: &str = "reviews";

/// Message shown to the user when a fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load product reviews. Please try again later.";

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Review cache as written to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedReviews {
    fetched_at: DateTime<Utc>,
    reviews: Vec<ReviewSummary>,
}

/// Review summaries fetched from a service and cached for a TTL.
///
/// The cache is mirrored to storage, so a store opened later over the same
/// storage serves it without fetching while it is fresh. A failed fetch
/// keeps whatever was cached before and records a user-visible error.
/// There is no automatic retry.
#[derive(Debug)]
pub struct ReviewStore<S, K, C = SystemClock> {
    service: S,
    cache: Cache<K>,
    clock: C,
    ttl: Duration,
    reviews: Vec<ReviewSummary>,
    last_fetched: Option<DateTime<Utc>>,
    error: Option<String>,
}

impl<S: ReviewService, K: KeyValueStore> ReviewStore<S, K> {
    /// Open the review cache in `store` using the system clock.
    pub fn open(service: S, store: K) -> Self {
        Self::open_with_clock(service, store, SystemClock)
    }
}

impl<S: ReviewService, K: KeyValueStore, C: Clock> ReviewStore<S, K, C> {
    /// Open the review cache in `store`, reading time from `clock`.
    ///
    /// An unreadable cache is discarded with a warning.
    pub fn open_with_clock(service: S, store: K, clock: C) -> Self {
        let cache = Cache::new(store);
        let cached = match cache.get::<CachedReviews>(REVIEWS_KEY) {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable review cache");
                None
            }
        };
        let (reviews, last_fetched) = match cached {
            Some(c) => (c.reviews, Some(c.fetched_at)),
            None => (Vec::new(), None),
        };

        Self {
            service,
            cache,
            clock,
            ttl: DEFAULT_CACHE_TTL,
            reviews,
            last_fetched,
            error: None,
        }
    }

    /// Set the cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether the cache can be served without fetching.
    ///
    /// A fetch time in the future counts as stale.
    pub fn is_fresh(&self) -> bool {
        let Some(at) = self.last_fetched else {
            return false;
        };
        match (self.clock.now() - at).to_std() {
            Ok(age) => !self.reviews.is_empty() && age < self.ttl,
            Err(_) => false,
        }
    }

    /// Return the summaries, fetching them if the cache is stale or `force` is set.
    pub async fn load_reviews(&mut self, force: bool) -> Result<&[ReviewSummary], ReviewError> {
        if !force && self.is_fresh() {
            tracing::debug!(count = self.reviews.len(), "serving cached reviews");
            return Ok(&self.reviews);
        }

        self.error = None;
        tracing::info!(force, "fetching review summaries");
        match self.service.fetch_reviews().await {
            Ok(reviews) => {
                tracing::info!(count = reviews.len(), "review summaries loaded");
                let cached = CachedReviews {
                    fetched_at: self.clock.now(),
                    reviews,
                };
                // Losing the cache only costs a refetch.
                if let Err(e) = self.cache.set(REVIEWS_KEY, &cached) {
                    tracing::warn!(error = %e, "failed to persist review cache");
                }
                self.reviews = cached.reviews;
                self.last_fetched = Some(cached.fetched_at);
                Ok(&self.reviews)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch review summaries");
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Look up a summary in the current cache.
    pub fn get_review_by_id(&self, id: ProductId) -> Option<&ReviewSummary> {
        self.reviews.iter().find(|r| r.id == id)
    }

    /// User-visible message from the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Cached summaries, possibly stale.
    pub fn reviews(&self) -> &[ReviewSummary] {
        &self.reviews
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.last_fetched
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::reviews::MockReviewService;
    use storefront_store::MemoryStore;

    /// Clock that only moves when told to.
    #[derive(Debug, Clone)]
    struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

    impl ManualClock {
        fn new() -> Self {
            let start = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc);
            Self(Arc::new(Mutex::new(start)))
        }

        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += chrono::Duration::from_std(by).unwrap();
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    type TestStore = ReviewStore<MockReviewService, MemoryStore, ManualClock>;

    fn store_over(storage: &MemoryStore, clock: &ManualClock) -> TestStore {
        ReviewStore::open_with_clock(
            MockReviewService::builtin().unwrap(),
            storage.clone(),
            clock.clone(),
        )
    }

    fn store() -> (TestStore, ManualClock) {
        let clock = ManualClock::new();
        (store_over(&MemoryStore::new(), &clock), clock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_hit_within_ttl() {
        let (mut store, clock) = store();
        assert_eq!(store.load_reviews(false).await.unwrap().len(), 8);

        clock.advance(Duration::from_secs(29 * 60));
        store.load_reviews(false).await.unwrap();
        assert_eq!(store.service().fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetch_after_ttl() {
        let (mut store, clock) = store();
        store.load_reviews(false).await.unwrap();

        clock.advance(DEFAULT_CACHE_TTL);
        assert!(!store.is_fresh());
        store.load_reviews(false).await.unwrap();
        assert_eq!(store.service().fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_force_bypasses_cache() {
        let (mut store, _clock) = store();
        store.load_reviews(false).await.unwrap();
        store.load_reviews(true).await.unwrap();
        assert_eq!(store.service().fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_shared_through_storage() {
        let storage = MemoryStore::new();
        let clock = ManualClock::new();

        let mut first = store_over(&storage, &clock);
        first.load_reviews(false).await.unwrap();
        assert!(storage.exists(REVIEWS_KEY).unwrap());

        clock.advance(Duration::from_secs(10 * 60));
        let mut second = store_over(&storage, &clock);
        assert!(second.is_fresh());
        assert_eq!(second.load_reviews(false).await.unwrap().len(), 8);
        assert_eq!(second.service().fetch_count(), 0);
        assert_eq!(second.last_fetched(), first.last_fetched());

        second.load_reviews(true).await.unwrap();
        assert_eq!(second.service().fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stored_cache_expires() {
        let storage = MemoryStore::new();
        let clock = ManualClock::new();
        store_over(&storage, &clock).load_reviews(false).await.unwrap();

        clock.advance(DEFAULT_CACHE_TTL + Duration::from_secs(1));
        let mut later = store_over(&storage, &clock);
        assert!(!later.is_fresh());
        later.load_reviews(false).await.unwrap();
        assert_eq!(later.service().fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_is_configurable() {
        let storage = MemoryStore::new();
        let clock = ManualClock::new();
        store_over(&storage, &clock).load_reviews(false).await.unwrap();

        clock.advance(Duration::from_secs(60));
        let short = store_over(&storage, &clock).with_ttl(Duration::from_secs(30));
        assert!(!short.is_fresh());
        let long = store_over(&storage, &clock).with_ttl(Duration::from_secs(120));
        assert!(long.is_fresh());
    }

    #[test]
    fn test_corrupt_cache_is_discarded() {
        let storage = MemoryStore::new();
        storage.set(REVIEWS_KEY, b"[1, 2").unwrap();
        let store = store_over(&storage, &ManualClock::new());
        assert!(store.reviews().is_empty());
        assert!(store.last_fetched().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_sets_error_and_keeps_cache() {
        let (mut store, _clock) = store();
        store.load_reviews(false).await.unwrap();

        store.service().set_failing(true);
        assert!(store.load_reviews(true).await.is_err());
        assert_eq!(store.error(), Some(LOAD_ERROR_MESSAGE));
        assert_eq!(store.reviews().len(), 8);

        // No retry until asked again.
        assert_eq!(store.service().fetch_count(), 2);

        store.service().set_failing(false);
        store.load_reviews(true).await.unwrap();
        assert!(store.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_on_empty_cache() {
        let (mut store, _clock) = store();
        store.service().set_failing(true);
        assert!(store.load_reviews(false).await.is_err());
        assert!(store.reviews().is_empty());
        assert!(store.last_fetched().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_review_by_id() {
        let (mut store, _clock) = store();
        assert!(store.get_review_by_id(ProductId::new(3)).is_none());

        store.load_reviews(false).await.unwrap();
        let review = store.get_review_by_id(ProductId::new(3)).unwrap();
        assert_eq!(review.product_name, "Organic Cotton T-Shirt");
        assert!(store.get_review_by_id(ProductId::new(99)).is_none());
    }
}
