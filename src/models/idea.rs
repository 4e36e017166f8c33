use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::COLLECTION_IDEAS;
use crate::models::{Listing, SortOrder};

/// Idea submitted for a project, stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Idea {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub project_id: ObjectId,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub created_at: mongodb::bson::DateTime,
}

impl Listing for Idea {
    const COLLECTION: &'static str = COLLECTION_IDEAS;
    const PARENT_FIELD: &'static str = "project_id";
    const ORDER: SortOrder = SortOrder::NewestFirst;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> ObjectId {
        self.project_id
    }

    fn created_at(&self) -> mongodb::bson::DateTime {
        self.created_at
    }
}
