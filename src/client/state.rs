use crate::pagination::total_pages;

/// What a paginated list currently shows.
///
/// Starts empty and loading; every fetch ends with `loading == false` and
/// either fresh `items`/`total` or an `error`. A failed fetch leaves the
/// previous `items` in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total: 0,
            loading: true,
            error: None,
        }
    }

    pub fn total_pages(&self, limit: u64) -> u64 {
        total_pages(self.total, limit)
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}
