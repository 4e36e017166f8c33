//! Comments attached to ideas and issue reports.

use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::oid::ObjectId;

use crate::constants::{CODE_POST_NOT_FOUND, ERR_INVALID_POST_ID, ERR_POST_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{Comment, CommentResponse, CreateCommentRequest, Idea, IssueReport};
use crate::pagination::{Page, PageRequest};
use crate::repositories::{ListingRepository, Repositories};
use crate::services::fetch_page;
use crate::validators::parse_object_id;

pub struct CommentService {
    ideas: Arc<dyn ListingRepository<Idea>>,
    reports: Arc<dyn ListingRepository<IssueReport>>,
    comments: Arc<dyn ListingRepository<Comment>>,
}

impl CommentService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            ideas: Arc::clone(&repositories.ideas),
            reports: Arc::clone(&repositories.reports),
            comments: Arc::clone(&repositories.comments),
        }
    }

    /// One page of a post's comments, oldest first.
    pub async fn list_comments(
        &self,
        post_id: &str,
        request: PageRequest,
    ) -> Result<Page<CommentResponse>, ApiError> {
        let post = parse_object_id(post_id, ERR_INVALID_POST_ID)?;
        let page = fetch_page(self.comments.as_ref(), post, request).await?;
        Ok(page.map(CommentResponse::from))
    }

    /// A post is either an idea or an issue report.
    async fn post_exists(&self, post: ObjectId) -> Result<bool, ApiError> {
        if self.ideas.find_by_id(post).await?.is_some() {
            return Ok(true);
        }
        Ok(self.reports.find_by_id(post).await?.is_some())
    }

    pub async fn create_comment(
        &self,
        post_id: &str,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, ApiError> {
        let post = parse_object_id(post_id, ERR_INVALID_POST_ID)?;

        if !self.post_exists(post).await? {
            warn!("Comment rejected: post {} not found", post);
            return Err(ApiError::not_found(CODE_POST_NOT_FOUND, ERR_POST_NOT_FOUND));
        }

        let comment = self
            .comments
            .insert(Comment {
                id: None,
                post_id: post,
                author_id: req.author_id,
                body: req.body.trim().to_string(),
                created_at: mongodb::bson::DateTime::now(),
            })
            .await?;

        info!("Comment {:?} posted on {}", comment.id, post);
        Ok(comment.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;

    fn comment_request(body: &str) -> CreateCommentRequest {
        CreateCommentRequest {
            author_id: "user-3".to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_comment_on_report_then_list() {
        let repositories = Repositories::memory();
        let service = CommentService::new(&repositories);

        let report = repositories
            .reports
            .insert(IssueReport {
                id: None,
                project_id: ObjectId::new(),
                author_id: "user-1".to_string(),
                title: "Flooded underpass".to_string(),
                description: "Water after every storm".to_string(),
                location: None,
                status: ReportStatus::InProgress,
                created_at: mongodb::bson::DateTime::now(),
            })
            .await
            .unwrap();
        let post_id = report.id.unwrap().to_hex();

        service
            .create_comment(&post_id, comment_request(" Seen it too "))
            .await
            .unwrap();
        service
            .create_comment(&post_id, comment_request("Reported to the city"))
            .await
            .unwrap();

        let page = service
            .list_comments(&post_id, PageRequest::new(1, 1))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].body, "Seen it too");
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let service = CommentService::new(&Repositories::memory());
        let err = service
            .create_comment(&ObjectId::new().to_hex(), comment_request("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.code(), CODE_POST_NOT_FOUND);
    }
}
