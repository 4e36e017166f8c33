use async_trait::async_trait;

use crate::pagination::Page;

/// Result of one page fetch, as seen by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success { items: Vec<T>, total: u64 },
    Failure { message: String },
}

impl<T, E: std::fmt::Display> From<Result<Page<T>, E>> for FetchOutcome<T> {
    fn from(result: Result<Page<T>, E>) -> Self {
        match result {
            Ok(page) => FetchOutcome::Success {
                items: page.items,
                total: page.total,
            },
            Err(err) => FetchOutcome::Failure {
                message: err.to_string(),
            },
        }
    }
}

/// Source of pages for a [`PageController`](super::PageController).
///
/// `parent` scopes the listing (project, post, conversation). A page past
/// the end must come back as an empty success carrying the real total.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, parent: Option<&str>, page: u64, limit: u64) -> FetchOutcome<T>;

    /// Largest page size the source serves as asked. `None` means unbounded.
    fn max_limit(&self) -> Option<u64> {
        None
    }
}
