//! The read path behind every list endpoint.

use log::debug;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::Listing;
use crate::pagination::{Page, PageRequest};
use crate::repositories::ListingRepository;

/// Fetch one page of the records under `parent`.
///
/// A page past the end is not an error: it comes back empty with the real
/// `total`. Storage failures propagate as [`ApiError::InternalServerError`].
pub async fn fetch_page<T: Listing>(
    repository: &dyn ListingRepository<T>,
    parent: ObjectId,
    request: PageRequest,
) -> Result<Page<T>, ApiError> {
    let total = repository.count_by_parent(parent).await?;
    let skip = request.skip();

    if skip >= total {
        debug!(
            "Page {} of {} under {} is past the end (total {})",
            request.page,
            T::COLLECTION,
            parent,
            total
        );
        return Ok(Page::empty(total));
    }

    let items = repository
        .find_by_parent(parent, skip, request.limit)
        .await?;
    Ok(Page { items, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongodb::bson::DateTime;

    use crate::models::Message;
    use crate::repositories::MemoryListingRepository;

    async fn seeded(conversation: ObjectId, count: i64) -> MemoryListingRepository<Message> {
        let repo = MemoryListingRepository::new();
        for n in 0..count {
            repo.insert(Message {
                id: None,
                conversation_id: conversation,
                sender_id: "user-1".to_string(),
                body: format!("message {}", n),
                created_at: DateTime::from_millis(1_000 + n),
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_pages_cover_the_listing_in_order() {
        let conversation = ObjectId::new();
        let repo = seeded(conversation, 12).await;

        let first = fetch_page(&repo, conversation, PageRequest::new(1, 10))
            .await
            .unwrap();
        assert_eq!(first.total, 12);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].body, "message 0");

        let second = fetch_page(&repo, conversation, PageRequest::new(2, 10))
            .await
            .unwrap();
        assert_eq!(second.total, 12);
        let bodies: Vec<&str> = second.items.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["message 10", "message 11"]);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty_with_real_total() {
        let conversation = ObjectId::new();
        let repo = seeded(conversation, 12).await;

        let page = fetch_page(&repo, conversation, PageRequest::new(5, 10))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 12);
    }

    #[tokio::test]
    async fn test_empty_parent_is_not_an_error() {
        let repo = MemoryListingRepository::<Message>::new();
        let page = fetch_page(&repo, ObjectId::new(), PageRequest::new(1, 10))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_repeated_fetch_is_stable() {
        let conversation = ObjectId::new();
        let repo = seeded(conversation, 7).await;
        let request = PageRequest::new(2, 3);

        let a = fetch_page(&repo, conversation, request).await.unwrap();
        let b = fetch_page(&repo, conversation, request).await.unwrap();
        let ids = |page: &Page<Message>| page.items.iter().map(|m| m.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a.total, b.total);
    }

    struct BrokenStore;

    #[async_trait]
    impl ListingRepository<Message> for BrokenStore {
        async fn count_by_parent(&self, _parent: ObjectId) -> Result<u64, ApiError> {
            Err(ApiError::internal("connection refused"))
        }

        async fn find_by_parent(
            &self,
            _parent: ObjectId,
            _skip: u64,
            _limit: u64,
        ) -> Result<Vec<Message>, ApiError> {
            Err(ApiError::internal("connection refused"))
        }

        async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Message>, ApiError> {
            Ok(None)
        }

        async fn insert(&self, record: Message) -> Result<Message, ApiError> {
            Ok(record)
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_distinct_from_empty() {
        let result = fetch_page(&BrokenStore, ObjectId::new(), PageRequest::new(1, 10)).await;
        assert!(matches!(
            result,
            Err(ApiError::InternalServerError { .. })
        ));
    }
}
