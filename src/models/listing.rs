//! Shared traits for records that are listed page by page under a parent.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Direction in which a listing is ordered by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    OldestFirst,
    NewestFirst,
}

impl SortOrder {
    /// MongoDB sort direction.
    pub fn direction(self) -> i32 {
        match self {
            SortOrder::OldestFirst => 1,
            SortOrder::NewestFirst => -1,
        }
    }
}

/// A stored record that belongs to exactly one parent and is listed in a
/// stable order: by `created_at`, ties broken by `_id`, both in [`Listing::ORDER`].
pub trait Listing: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection the records live in.
    const COLLECTION: &'static str;
    /// Name of the field holding the parent id.
    const PARENT_FIELD: &'static str;
    const ORDER: SortOrder;

    fn id(&self) -> Option<ObjectId>;
    fn set_id(&mut self, id: ObjectId);
    fn parent_id(&self) -> ObjectId;
    fn created_at(&self) -> mongodb::bson::DateTime;
}

/// Convert a stored timestamp into the UTC time rendered in responses.
pub fn to_utc(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// Hex form of a stored id, empty for a record that was never stored.
pub fn hex_id(id: Option<ObjectId>) -> String {
    id.map(|id| id.to_hex()).unwrap_or_default()
}
