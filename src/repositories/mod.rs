//! Repository layer for database operations.
//!
//! Services talk to the [`ListingRepository`] trait; the MongoDB and
//! in-memory implementations are chosen once at startup.

pub mod listing_repository;
pub mod memory_repository;
pub mod mongo_repository;

use std::sync::Arc;

use mongodb::Database;

pub use listing_repository::ListingRepository;
pub use memory_repository::MemoryListingRepository;
pub use mongo_repository::MongoListingRepository;

use crate::errors::ApiError;
use crate::models::{Comment, Idea, IssueReport, Message};

/// One repository per listed record type, shared by the services.
#[derive(Clone)]
pub struct Repositories {
    pub ideas: Arc<dyn ListingRepository<Idea>>,
    pub reports: Arc<dyn ListingRepository<IssueReport>>,
    pub comments: Arc<dyn ListingRepository<Comment>>,
    pub messages: Arc<dyn ListingRepository<Message>>,
}

impl Repositories {
    /// Repositories backed by MongoDB collections. Creates indexes first.
    pub async fn mongo(db: &Database) -> Result<Self, ApiError> {
        let ideas = MongoListingRepository::<Idea>::new(db);
        let reports = MongoListingRepository::<IssueReport>::new(db);
        let comments = MongoListingRepository::<Comment>::new(db);
        let messages = MongoListingRepository::<Message>::new(db);

        ideas.create_indexes().await?;
        reports.create_indexes().await?;
        comments.create_indexes().await?;
        messages.create_indexes().await?;

        Ok(Self {
            ideas: Arc::new(ideas),
            reports: Arc::new(reports),
            comments: Arc::new(comments),
            messages: Arc::new(messages),
        })
    }

    /// Repositories that keep everything in process memory.
    pub fn memory() -> Self {
        Self {
            ideas: Arc::new(MemoryListingRepository::new()),
            reports: Arc::new(MemoryListingRepository::new()),
            comments: Arc::new(MemoryListingRepository::new()),
            messages: Arc::new(MemoryListingRepository::new()),
        }
    }
}
