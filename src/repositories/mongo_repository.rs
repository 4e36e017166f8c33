//! MongoDB-backed listing repository.
//!
//! One generic implementation serves every [`Listing`] type; the collection
//! name, parent field and sort direction come from the type itself.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::ERR_MISSING_INSERTED_ID;
use crate::errors::ApiError;
use crate::models::Listing;
use crate::repositories::ListingRepository;

/// Repository for one MongoDB collection of listed records.
pub struct MongoListingRepository<T: Listing> {
    collection: Collection<T>,
}

impl<T: Listing> MongoListingRepository<T> {
    /// Create a new repository over `T::COLLECTION`.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(T::COLLECTION),
        }
    }

    /// Sort used for every page query: creation time, then `_id`.
    fn sort() -> Document {
        let direction = T::ORDER.direction();
        doc! { "created_at": direction, "_id": direction }
    }

    fn parent_filter(parent: ObjectId) -> Document {
        let mut filter = Document::new();
        filter.insert(T::PARENT_FIELD, parent);
        filter
    }

    /// Create the compound index that serves both the count and the page query.
    ///
    /// Should be called once during application startup.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for {} collection...", T::COLLECTION);

        let mut keys = Document::new();
        keys.insert(T::PARENT_FIELD, 1);
        keys.insert("created_at", 1);
        keys.insert("_id", 1);

        let index = IndexModel::builder().keys(keys).build();

        self.collection.create_index(index).await?;
        info!("Database indexes created for {}", T::COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl<T: Listing> ListingRepository<T> for MongoListingRepository<T> {
    async fn count_by_parent(&self, parent: ObjectId) -> Result<u64, ApiError> {
        Ok(self
            .collection
            .count_documents(Self::parent_filter(parent))
            .await?)
    }

    async fn find_by_parent(
        &self,
        parent: ObjectId,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<T>, ApiError> {
        debug!(
            "Repository: Finding {} under {} (skip {}, limit {})",
            T::COLLECTION,
            parent,
            skip,
            limit
        );
        let cursor = self
            .collection
            .find(Self::parent_filter(parent))
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .sort(Self::sort())
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, ApiError> {
        debug!("Repository: Finding {} by ID: {}", T::COLLECTION, id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, mut record: T) -> Result<T, ApiError> {
        let result = self.collection.insert_one(&record).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal(ERR_MISSING_INSERTED_ID))?;
        record.set_id(id);
        Ok(record)
    }
}
