//! Query parameters shared by every paginated list endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::ApiError;
use crate::pagination::PageRequest;
use crate::validators::validation_errors_to_api_error;

/// `?page=&limit=` as sent by clients. Missing values fall back to defaults.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: Option<u64>,
}

impl PageQuery {
    /// Validate the query and apply defaults; `limit` is capped at [`MAX_PAGE_SIZE`].
    pub fn resolve(&self) -> Result<PageRequest, ApiError> {
        self.validate().map_err(validation_errors_to_api_error)?;

        Ok(PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        ))
    }
}
