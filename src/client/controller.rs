//! Stateful controller behind a paginated list view.
//!
//! Every navigation call that changes what should be shown spawns an
//! independent fetch on the tokio runtime. Requests are numbered as they are
//! issued and a finished request is applied only if it is still the latest
//! one, so a slow response for an old page can never overwrite a newer page.
//! After [`PageController::dispose`] (or drop) nothing is applied at all.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use tokio::sync::watch;

use crate::client::{FetchOutcome, FetchState, PageFetcher};

/// Bookkeeping that must change together with the published state.
struct Ledger {
    parent: Option<String>,
    /// Sequence number of the most recently issued request.
    issued: u64,
    disposed: bool,
}

struct Inner<T, F> {
    fetcher: F,
    limit: u64,
    ledger: Mutex<Ledger>,
    state: watch::Sender<FetchState<T>>,
}

impl<T, F> Inner<T, F>
where
    T: Send + Sync + 'static,
    F: PageFetcher<T> + 'static,
{
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish the outcome of request `seq` unless a newer request exists.
    fn apply(&self, seq: u64, outcome: FetchOutcome<T>) {
        let ledger = self.ledger();
        if ledger.disposed {
            debug!("Dropping response #{} for a disposed list", seq);
            return;
        }
        if seq != ledger.issued {
            debug!(
                "Dropping stale response #{} (latest is #{})",
                seq, ledger.issued
            );
            return;
        }

        self.state.send_modify(|state| {
            state.loading = false;
            match outcome {
                FetchOutcome::Success { items, total } => {
                    state.items = items;
                    state.total = total;
                    state.error = None;
                }
                FetchOutcome::Failure { message } => {
                    debug!("Page {} failed: {}", state.page, message);
                    state.error = Some(message);
                }
            }
        });
    }
}

/// Owns the [`FetchState`] of one paginated list and navigates it.
///
/// Must be created inside a tokio runtime. The `limit` is fixed for the
/// lifetime of the controller.
pub struct PageController<T, F> {
    inner: Arc<Inner<T, F>>,
}

impl<T, F> PageController<T, F>
where
    T: Send + Sync + 'static,
    F: PageFetcher<T> + 'static,
{
    /// Create the controller and issue the load of page 1.
    ///
    /// A `limit` of 0 is raised to 1 and a `limit` above the fetcher's
    /// [`PageFetcher::max_limit`] is lowered to it, so every page is served
    /// at the size used for `total_pages`.
    pub fn new(fetcher: F, parent: Option<String>, limit: u64) -> Self {
        let limit = match fetcher.max_limit() {
            Some(max) if limit > max => {
                debug!("Page size {} lowered to the supported {}", limit, max);
                max.max(1)
            }
            _ => limit.max(1),
        };
        let (state, _) = watch::channel(FetchState::new());
        let controller = Self {
            inner: Arc::new(Inner {
                fetcher,
                limit,
                ledger: Mutex::new(Ledger {
                    parent,
                    issued: 0,
                    disposed: false,
                }),
                state,
            }),
        };

        let mut ledger = controller.inner.ledger();
        controller.issue(&mut ledger, 1);
        drop(ledger);
        controller
    }

    pub fn limit(&self) -> u64 {
        self.inner.limit
    }

    pub fn page(&self) -> u64 {
        self.inner.state.borrow().page
    }

    /// `ceil(total / limit)` from the latest successful fetch.
    pub fn total_pages(&self) -> u64 {
        self.inner.state.borrow().total_pages(self.inner.limit)
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.state.subscribe()
    }

    /// Start request for `page`. The caller holds the ledger lock.
    fn issue(&self, ledger: &mut Ledger, page: u64) -> bool {
        if ledger.disposed {
            return false;
        }
        ledger.issued += 1;
        let seq = ledger.issued;
        let parent = ledger.parent.clone();

        self.inner.state.send_modify(|state| {
            state.page = page;
            state.loading = true;
        });

        debug!("Issuing request #{} for page {}", seq, page);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = inner
                .fetcher
                .fetch_page(parent.as_deref(), page, inner.limit)
                .await;
            inner.apply(seq, outcome);
        });
        true
    }

    /// Advance one page. No-op on the last page or when there is nothing to show.
    pub fn next_page(&self) -> bool {
        let mut ledger = self.inner.ledger();
        let (page, last) = {
            let state = self.inner.state.borrow();
            (state.page, state.total_pages(self.inner.limit))
        };
        if last == 0 || page >= last {
            return false;
        }
        self.issue(&mut ledger, page + 1)
    }

    /// Go back one page. No-op on page 1.
    pub fn prev_page(&self) -> bool {
        let mut ledger = self.inner.ledger();
        let page = self.inner.state.borrow().page;
        if page <= 1 {
            return false;
        }
        self.issue(&mut ledger, page - 1)
    }

    /// Jump to page `n` without checking it against the total; a page past
    /// the end simply loads empty. Page 0 is treated as page 1.
    pub fn go_to_page(&self, n: u64) -> bool {
        let mut ledger = self.inner.ledger();
        let target = n.max(1);
        if target == self.inner.state.borrow().page {
            return false;
        }
        self.issue(&mut ledger, target)
    }

    /// Reload the current page.
    pub fn refresh(&self) -> bool {
        let mut ledger = self.inner.ledger();
        let page = self.inner.state.borrow().page;
        self.issue(&mut ledger, page)
    }

    /// Switch to another parent. Starts over at page 1 with an empty list.
    pub fn set_parent(&self, parent: Option<String>) -> bool {
        let mut ledger = self.inner.ledger();
        if ledger.disposed || ledger.parent == parent {
            return false;
        }
        ledger.parent = parent;
        self.inner.state.send_modify(|state| {
            state.items.clear();
            state.total = 0;
            state.error = None;
        });
        self.issue(&mut ledger, 1)
    }

    /// Stop applying results. In-flight requests run to completion and are dropped.
    pub fn dispose(&self) {
        let mut ledger = self.inner.ledger();
        if ledger.disposed {
            return;
        }
        ledger.disposed = true;
        self.inner.state.send_modify(|state| state.loading = false);
    }
}

impl<T, F> PageController<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: PageFetcher<T> + 'static,
{
    pub fn snapshot(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    /// Wait until the latest issued request has been applied.
    pub async fn settled(&self) -> FetchState<T> {
        let mut rx = self.subscribe();
        let latest = rx.wait_for(|state| !state.loading).await.map(|state| state.clone());
        latest.unwrap_or_else(|_| self.snapshot())
    }
}

impl<T, F> Drop for PageController<T, F> {
    fn drop(&mut self) {
        let mut ledger = self
            .inner
            .ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        ledger.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    /// Serves `0..total` as items, optionally failing or sleeping per page.
    struct NumberSource {
        total: u64,
        failing: Arc<AtomicBool>,
        delays: HashMap<u64, Duration>,
        calls: Arc<AtomicUsize>,
    }

    impl NumberSource {
        fn new(total: u64) -> Self {
            Self {
                total,
                failing: Arc::new(AtomicBool::new(false)),
                delays: HashMap::new(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl PageFetcher<u64> for NumberSource {
        async fn fetch_page(
            &self,
            _parent: Option<&str>,
            page: u64,
            limit: u64,
        ) -> FetchOutcome<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(&page) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing.load(Ordering::SeqCst) {
                return FetchOutcome::Failure {
                    message: "network unreachable".to_string(),
                };
            }
            let start = (page - 1) * limit;
            let end = (start + limit).min(self.total);
            FetchOutcome::Success {
                items: (start.min(end)..end).collect(),
                total: self.total,
            }
        }
    }

    /// Counts per parent; fails after `fail_after` successful calls.
    struct FlakySource {
        per_parent: HashMap<String, u64>,
        fail_after: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher<String> for FlakySource {
        async fn fetch_page(
            &self,
            parent: Option<&str>,
            page: u64,
            limit: u64,
        ) -> FetchOutcome<String> {
            if self.calls.fetch_add(1, Ordering::SeqCst) >= self.fail_after {
                return FetchOutcome::Failure {
                    message: "503 Service Unavailable".to_string(),
                };
            }
            let parent = parent.unwrap_or_default();
            let total = self.per_parent.get(parent).copied().unwrap_or(0);
            let start = (page - 1) * limit;
            let end = (start + limit).min(total);
            FetchOutcome::Success {
                items: (start.min(end)..end)
                    .map(|n| format!("{}-{}", parent, n))
                    .collect(),
                total,
            }
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let controller = PageController::new(NumberSource::new(3), None, 10);
        let initial = controller.snapshot();
        assert!(initial.loading);
        assert!(initial.items.is_empty());
        assert_eq!(initial.page, 1);
        assert_eq!(initial.error, None);

        let loaded = controller.settled().await;
        assert!(!loaded.loading);
        assert_eq!(loaded.items, vec![0, 1, 2]);
        assert_eq!(loaded.total, 3);
    }

    #[tokio::test]
    async fn test_next_page_clamps_at_last_page() {
        let controller = PageController::new(NumberSource::new(25), None, 10);
        controller.settled().await;
        assert_eq!(controller.total_pages(), 3);

        assert!(controller.next_page());
        assert_eq!(controller.settled().await.page, 2);
        assert!(controller.next_page());
        let third = controller.settled().await;
        assert_eq!(third.page, 3);
        assert_eq!(third.items, vec![20, 21, 22, 23, 24]);

        assert!(!controller.next_page());
        assert_eq!(controller.page(), 3);
    }

    #[tokio::test]
    async fn test_empty_listing_navigation_is_noop() {
        let source = NumberSource::new(0);
        let calls = Arc::clone(&source.calls);
        let controller = PageController::new(source, None, 10);
        let state = controller.settled().await;
        assert!(state.items.is_empty());
        assert_eq!(controller.total_pages(), 0);

        assert!(!controller.next_page());
        assert!(!controller.prev_page());
        assert_eq!(controller.page(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prev_page_stops_at_one() {
        let controller = PageController::new(NumberSource::new(30), None, 10);
        controller.settled().await;
        assert!(!controller.prev_page());

        assert!(controller.go_to_page(3));
        controller.settled().await;
        assert!(controller.prev_page());
        assert_eq!(controller.settled().await.items, (10..20).collect::<Vec<_>>());
        assert!(controller.prev_page());
        controller.settled().await;
        assert!(!controller.prev_page());
        assert_eq!(controller.page(), 1);
    }

    #[tokio::test]
    async fn test_go_to_page_past_the_end_loads_empty() {
        let controller = PageController::new(NumberSource::new(12), None, 10);
        controller.settled().await;

        assert!(controller.go_to_page(5));
        let state = controller.settled().await;
        assert_eq!(state.page, 5);
        assert!(state.items.is_empty());
        assert_eq!(state.total, 12);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_go_to_page_zero_and_same_page() {
        let source = NumberSource::new(12);
        let calls = Arc::clone(&source.calls);
        let controller = PageController::new(source, None, 10);
        controller.settled().await;

        assert!(!controller.go_to_page(1));
        assert!(!controller.go_to_page(0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let controller = PageController::new(NumberSource::new(15), None, 10);
        controller.settled().await;

        assert!(controller.refresh());
        let first = controller.settled().await;
        assert!(controller.refresh());
        let second = controller.settled().await;
        assert_eq!(first, second);
        assert_eq!(second.page, 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let source = FlakySource {
            per_parent: HashMap::from([("p".to_string(), 4)]),
            fail_after: 1,
            calls: AtomicUsize::new(0),
        };
        let controller = PageController::new(source, Some("p".to_string()), 2);
        let loaded = controller.settled().await;
        assert_eq!(loaded.items, vec!["p-0", "p-1"]);

        assert!(controller.refresh());
        assert!(controller.snapshot().loading);
        let failed = controller.settled().await;
        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some("503 Service Unavailable"));
        assert_eq!(failed.items, vec!["p-0", "p-1"]);
        assert_eq!(failed.total, 4);
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let source = NumberSource::new(5);
        let failing = Arc::clone(&source.failing);
        failing.store(true, Ordering::SeqCst);
        let controller = PageController::new(source, None, 10);

        let failed = controller.settled().await;
        assert_eq!(failed.error.as_deref(), Some("network unreachable"));
        assert!(failed.items.is_empty());
        assert_eq!(controller.total_pages(), 0);

        failing.store(false, Ordering::SeqCst);
        assert!(controller.refresh());
        let recovered = controller.settled().await;
        assert_eq!(recovered.error, None);
        assert_eq!(recovered.items, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_earlier_response_is_discarded() {
        let mut source = NumberSource::new(50);
        source.delays.insert(2, Duration::from_secs(5));
        source.delays.insert(3, Duration::from_millis(10));
        let controller = PageController::new(source, None, 10);
        controller.settled().await;

        assert!(controller.go_to_page(2));
        assert!(controller.go_to_page(3));

        let state = controller.settled().await;
        assert_eq!(state.page, 3);
        assert_eq!(state.items, (20..30).collect::<Vec<_>>());

        // Let the slow page-2 response land; it must not replace page 3.
        tokio::time::sleep(Duration::from_secs(10)).await;
        let later = controller.snapshot();
        assert_eq!(later.page, 3);
        assert_eq!(later.items, (20..30).collect::<Vec<_>>());
        assert!(!later.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_until_latest_request_lands() {
        let mut source = NumberSource::new(50);
        source.delays.insert(2, Duration::from_millis(10));
        source.delays.insert(3, Duration::from_secs(5));
        let controller = PageController::new(source, None, 10);
        controller.settled().await;

        controller.go_to_page(2);
        controller.go_to_page(3);

        // Page 2 finishes first but is no longer wanted.
        tokio::time::sleep(Duration::from_secs(1)).await;
        let midway = controller.snapshot();
        assert!(midway.loading);
        assert_eq!(midway.page, 3);
        assert_eq!(midway.items, (0..10).collect::<Vec<_>>());

        let state = controller.settled().await;
        assert_eq!(state.items, (20..30).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_stops_applying_results() {
        let mut source = NumberSource::new(50);
        source.delays.insert(2, Duration::from_secs(1));
        let calls = Arc::clone(&source.calls);
        let controller = PageController::new(source, None, 10);
        controller.settled().await;
        let mut rx = controller.subscribe();

        assert!(controller.next_page());
        controller.dispose();
        rx.borrow_and_update();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let state = controller.snapshot();
        assert_eq!(state.items, (0..10).collect::<Vec<_>>());
        assert!(!rx.has_changed().unwrap());

        assert!(!controller.refresh());
        assert!(!controller.next_page());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_applying_results() {
        let mut source = NumberSource::new(50);
        source.delays.insert(1, Duration::from_secs(1));
        let controller = PageController::new(source, None, 10);
        let mut rx = controller.subscribe();
        rx.borrow_and_update();
        drop(controller);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.borrow().items.is_empty());
    }

    #[tokio::test]
    async fn test_parent_change_resets_to_first_page() {
        let source = FlakySource {
            per_parent: HashMap::from([("a".to_string(), 5), ("b".to_string(), 3)]),
            fail_after: usize::MAX,
            calls: AtomicUsize::new(0),
        };
        let controller = PageController::new(source, Some("a".to_string()), 2);
        controller.settled().await;
        controller.next_page();
        assert_eq!(controller.settled().await.items, vec!["a-2", "a-3"]);

        assert!(!controller.set_parent(Some("a".to_string())));
        assert!(controller.set_parent(Some("b".to_string())));
        let switched = controller.snapshot();
        assert!(switched.loading);
        assert!(switched.items.is_empty());
        assert_eq!(switched.page, 1);

        let state = controller.settled().await;
        assert_eq!(state.items, vec!["b-0", "b-1"]);
        assert_eq!(state.total, 3);
        assert_eq!(controller.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_limit_is_at_least_one() {
        let controller = PageController::new(NumberSource::new(3), None, 0);
        assert_eq!(controller.limit(), 1);
        assert_eq!(controller.settled().await.items, vec![0]);
        assert_eq!(controller.total_pages(), 3);
    }

    /// Serves at most `max` items per page, whatever limit is asked for.
    struct CappedSource {
        total: u64,
        max: u64,
    }

    #[async_trait]
    impl PageFetcher<u64> for CappedSource {
        async fn fetch_page(
            &self,
            _parent: Option<&str>,
            page: u64,
            limit: u64,
        ) -> FetchOutcome<u64> {
            let limit = limit.min(self.max);
            let start = (page - 1) * limit;
            let end = (start + limit).min(self.total);
            FetchOutcome::Success {
                items: (start.min(end)..end).collect(),
                total: self.total,
            }
        }

        fn max_limit(&self) -> Option<u64> {
            Some(self.max)
        }
    }

    #[tokio::test]
    async fn test_limit_is_capped_to_fetcher_maximum() {
        let controller = PageController::new(CappedSource { total: 300, max: 100 }, None, 200);
        assert_eq!(controller.limit(), 100);
        controller.settled().await;
        assert_eq!(controller.total_pages(), 3);

        let mut seen = controller.snapshot().items;
        while controller.next_page() {
            seen.extend(controller.settled().await.items);
        }
        assert_eq!(seen, (0..300).collect::<Vec<_>>());

        let small = PageController::new(CappedSource { total: 5, max: 100 }, None, 20);
        assert_eq!(small.limit(), 20);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_transition() {
        let controller = PageController::new(NumberSource::new(20), None, 10);
        let mut rx = controller.subscribe();
        controller.settled().await;
        rx.borrow_and_update();

        controller.next_page();
        rx.changed().await.unwrap();
        let loaded = rx.wait_for(|s| !s.loading).await.unwrap().clone();
        assert_eq!(loaded.page, 2);
        assert_eq!(loaded.items, (10..20).collect::<Vec<_>>());
    }
}
