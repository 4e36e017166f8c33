use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::COLLECTION_MESSAGES;
use crate::models::{Listing, SortOrder};

/// Direct message inside a conversation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub conversation_id: ObjectId,
    pub sender_id: String,
    pub body: String,
    pub created_at: mongodb::bson::DateTime,
}

impl Listing for Message {
    const COLLECTION: &'static str = COLLECTION_MESSAGES;
    const PARENT_FIELD: &'static str = "conversation_id";
    const ORDER: SortOrder = SortOrder::OldestFirst;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> ObjectId {
        self.conversation_id
    }

    fn created_at(&self) -> mongodb::bson::DateTime {
        self.created_at
    }
}
