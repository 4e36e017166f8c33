//! [`PageFetcher`] over the JSON list endpoints.

use std::marker::PhantomData;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::client::{ClientError, FetchOutcome, PageFetcher};
use crate::constants::MAX_PAGE_SIZE;
use crate::models::ErrorResponse;
use crate::pagination::Page;

/// Route segment replaced by the percent-encoded parent id.
const PARENT_PLACEHOLDER: &str = "{id}";

/// Fetches pages with `GET {base_url}{route}?page=&limit=`.
///
/// The [`reqwest::Client`] is passed in so callers decide its lifetime,
/// timeouts and connection pool; dropping the fetcher does not close it.
pub struct HttpPageFetcher<T> {
    client: reqwest::Client,
    base_url: String,
    route: String,
    max_limit: u64,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageFetcher<T> {
    /// `route` is a path such as `/api/projects/{id}/ideas`.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            route: route.into(),
            max_limit: MAX_PAGE_SIZE,
            _item: PhantomData,
        }
    }

    /// Page size the server caps requests at, [`MAX_PAGE_SIZE`] by default.
    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = max_limit.max(1);
        self
    }

    fn endpoint(&self, parent: Option<&str>) -> Result<Url, ClientError> {
        let invalid = || ClientError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments.pop_if_empty();
            for segment in self.route.split('/').filter(|s| !s.is_empty()) {
                if segment == PARENT_PLACEHOLDER {
                    let parent = parent.ok_or_else(|| ClientError::MissingParent {
                        route: self.route.clone(),
                    })?;
                    segments.push(parent);
                } else {
                    segments.push(segment);
                }
            }
        }
        Ok(url)
    }
}

impl<T: DeserializeOwned> HttpPageFetcher<T> {
    async fn request(
        &self,
        parent: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<Page<T>, ClientError> {
        let url = self.endpoint(parent)?;
        debug!("GET {} page={} limit={}", url, page, limit);

        let response = self
            .client
            .get(url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        decode_page(status, &body)
    }
}

/// Interpret a list endpoint response: `{items, total}` on success,
/// `{error}` otherwise.
pub(crate) fn decode_page<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Page<T>, ClientError> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }

    let message = serde_json::from_slice::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    warn!("List request failed with {}: {}", status, message);
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl<T: DeserializeOwned + Send + 'static> PageFetcher<T> for HttpPageFetcher<T> {
    async fn fetch_page(&self, parent: Option<&str>, page: u64, limit: u64) -> FetchOutcome<T> {
        self.request(parent, page, limit).await.into()
    }

    fn max_limit(&self) -> Option<u64> {
        Some(self.max_limit)
    }
}
