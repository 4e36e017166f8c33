//! Enriched records returned by the listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{hex_id, to_utc, Comment, Idea, IssueReport, Message, ReportStatus};

/// Idea as shown in a project's idea list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct IdeaResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "507f191e810c19729de860ea")]
    pub project_id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    /// Number of comments posted on the idea
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl IdeaResponse {
    pub fn new(idea: Idea, comment_count: u64) -> Self {
        Self {
            id: hex_id(idea.id),
            project_id: idea.project_id.to_hex(),
            author_id: idea.author_id,
            title: idea.title,
            description: idea.description,
            comment_count,
            created_at: to_utc(idea.created_at),
        }
    }
}

/// Issue report as shown in a project's report list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ReportResponse {
    #[schema(example = "507f1f77bcf86cd799439012")]
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: ReportStatus,
    /// Number of comments posted on the report
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl ReportResponse {
    pub fn new(report: IssueReport, comment_count: u64) -> Self {
        Self {
            id: hex_id(report.id),
            project_id: report.project_id.to_hex(),
            author_id: report.author_id,
            title: report.title,
            description: report.description,
            location: report.location,
            status: report.status,
            comment_count,
            created_at: to_utc(report.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: hex_id(comment.id),
            post_id: comment.post_id.to_hex(),
            author_id: comment.author_id,
            body: comment.body,
            created_at: to_utc(comment.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: hex_id(message.id),
            conversation_id: message.conversation_id.to_hex(),
            sender_id: message.sender_id,
            body: message.body,
            created_at: to_utc(message.created_at),
        }
    }
}
