//! Messages exchanged inside a conversation.

use std::sync::Arc;

use log::info;

use crate::constants::ERR_INVALID_CONVERSATION_ID;
use crate::errors::ApiError;
use crate::models::{CreateMessageRequest, Message, MessageResponse};
use crate::pagination::{Page, PageRequest};
use crate::repositories::{ListingRepository, Repositories};
use crate::services::fetch_page;
use crate::validators::parse_object_id;

pub struct MessageService {
    messages: Arc<dyn ListingRepository<Message>>,
}

impl MessageService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            messages: Arc::clone(&repositories.messages),
        }
    }

    /// One page of a conversation, oldest message first.
    pub async fn list_messages(
        &self,
        conversation_id: &str,
        request: PageRequest,
    ) -> Result<Page<MessageResponse>, ApiError> {
        let conversation = parse_object_id(conversation_id, ERR_INVALID_CONVERSATION_ID)?;
        let page = fetch_page(self.messages.as_ref(), conversation, request).await?;
        Ok(page.map(MessageResponse::from))
    }

    pub async fn send_message(
        &self,
        conversation_id: &str,
        req: CreateMessageRequest,
    ) -> Result<MessageResponse, ApiError> {
        let conversation = parse_object_id(conversation_id, ERR_INVALID_CONVERSATION_ID)?;

        let message = self
            .messages
            .insert(Message {
                id: None,
                conversation_id: conversation,
                sender_id: req.sender_id,
                body: req.body.trim().to_string(),
                created_at: mongodb::bson::DateTime::now(),
            })
            .await?;

        info!("Message {:?} sent in conversation {}", message.id, conversation);
        Ok(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[tokio::test]
    async fn test_send_then_page_through() {
        let service = MessageService::new(&Repositories::memory());
        let conversation = ObjectId::new().to_hex();

        for n in 0..5 {
            service
                .send_message(
                    &conversation,
                    CreateMessageRequest {
                        sender_id: "user-1".to_string(),
                        body: format!("hello {}", n),
                    },
                )
                .await
                .unwrap();
        }

        let last = service
            .list_messages(&conversation, PageRequest::new(3, 2))
            .await
            .unwrap();
        assert_eq!(last.total, 5);
        assert_eq!(last.items.len(), 1);

        let beyond = service
            .list_messages(&conversation, PageRequest::new(4, 2))
            .await
            .unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 5);
    }
}
