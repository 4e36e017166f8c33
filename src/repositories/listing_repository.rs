//! Storage contract for parent-scoped listings.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::Listing;

/// Read and append access to records of type `T`, grouped by parent id.
///
/// `find_by_parent` must return records in the order given by
/// [`Listing::ORDER`] with `_id` as tie-breaker, so the same `skip`/`limit`
/// always yields the same slice while the data is unchanged.
#[async_trait]
pub trait ListingRepository<T: Listing>: Send + Sync {
    /// Count every record under `parent`.
    async fn count_by_parent(&self, parent: ObjectId) -> Result<u64, ApiError>;

    /// Fetch at most `limit` records under `parent`, skipping the first `skip`.
    async fn find_by_parent(
        &self,
        parent: ObjectId,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<T>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, ApiError>;

    /// Store a new record and return it with its assigned id.
    async fn insert(&self, record: T) -> Result<T, ApiError>;
}
