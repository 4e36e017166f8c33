use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::COLLECTION_COMMENTS;
use crate::models::{Listing, SortOrder};

/// Comment on a post (an idea or an issue report)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub post_id: ObjectId,
    pub author_id: String,
    pub body: String,
    pub created_at: mongodb::bson::DateTime,
}

impl Listing for Comment {
    const COLLECTION: &'static str = COLLECTION_COMMENTS;
    const PARENT_FIELD: &'static str = "post_id";
    const ORDER: SortOrder = SortOrder::OldestFirst;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> ObjectId {
        self.post_id
    }

    fn created_at(&self) -> mongodb::bson::DateTime {
        self.created_at
    }
}
