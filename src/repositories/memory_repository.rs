//! In-process listing repository.
//!
//! Keeps records grouped by parent id in a [`DashMap`]. Used for local runs
//! without MongoDB (`STORE_BACKEND=memory`) and throughout the test suite.

use std::cmp::Ordering;

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{Listing, SortOrder};
use crate::repositories::ListingRepository;

pub struct MemoryListingRepository<T: Listing> {
    records: DashMap<ObjectId, Vec<T>>,
}

impl<T: Listing> MemoryListingRepository<T> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Same ordering the MongoDB repository asks for.
    fn compare(a: &T, b: &T) -> Ordering {
        let ascending = a
            .created_at()
            .timestamp_millis()
            .cmp(&b.created_at().timestamp_millis())
            .then_with(|| a.id().map(|id| id.bytes()).cmp(&b.id().map(|id| id.bytes())));
        match T::ORDER {
            SortOrder::OldestFirst => ascending,
            SortOrder::NewestFirst => ascending.reverse(),
        }
    }
}

impl<T: Listing> Default for MemoryListingRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Listing> ListingRepository<T> for MemoryListingRepository<T> {
    async fn count_by_parent(&self, parent: ObjectId) -> Result<u64, ApiError> {
        Ok(self
            .records
            .get(&parent)
            .map(|records| records.len() as u64)
            .unwrap_or(0))
    }

    async fn find_by_parent(
        &self,
        parent: ObjectId,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<T>, ApiError> {
        debug!(
            "Memory repository: Finding {} under {} (skip {}, limit {})",
            T::COLLECTION,
            parent,
            skip,
            limit
        );
        let Some(records) = self.records.get(&parent) else {
            return Ok(Vec::new());
        };

        let mut sorted: Vec<&T> = records.iter().collect();
        sorted.sort_by(|a, b| Self::compare(a, b));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(sorted.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, ApiError> {
        Ok(self.records.iter().find_map(|entry| {
            entry
                .value()
                .iter()
                .find(|record| record.id() == Some(id))
                .cloned()
        }))
    }

    async fn insert(&self, mut record: T) -> Result<T, ApiError> {
        if record.id().is_none() {
            record.set_id(ObjectId::new());
        }
        self.records
            .entry(record.parent_id())
            .or_default()
            .push(record.clone());
        Ok(record)
    }
}
