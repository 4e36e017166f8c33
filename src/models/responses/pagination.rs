//! Pagination response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::pagination::{total_pages, Page, PageRequest};

/// Paginated list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Records on this page, in listing order
    pub items: Vec<T>,
    /// Total number of matching records across all pages
    pub total: u64,
    /// Current page number (1-based)
    pub page: u64,
    /// Items per page
    pub limit: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn new(page: Page<T>, request: PageRequest) -> Self {
        Self {
            success: true,
            total_pages: total_pages(page.total, request.limit),
            items: page.items,
            total: page.total,
            page: request.page,
            limit: request.limit,
        }
    }
}
