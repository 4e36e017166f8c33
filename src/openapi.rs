use utoipa::OpenApi;

use crate::models::{
    CommentResponse, CreateCommentRequest, CreateIdeaRequest, CreateMessageRequest,
    CreateReportRequest, ErrorResponse, HealthResponse, IdeaResponse, MessageResponse,
    PageResponse, ReportResponse, ReportStatus,
};

/// OpenAPI documentation for the civic engagement API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Civic Hub API",
        version = "0.1.0",
        description = "Ideas, issue reports, comments and conversations for local projects. Every list endpoint is paginated with `page` and `limit`.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Ideas", description = "Ideas submitted for a project"),
        (name = "Reports", description = "Issue reports filed against a project"),
        (name = "Comments", description = "Comments on ideas and reports"),
        (name = "Messages", description = "Messages inside a conversation")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_project_ideas,
        crate::handlers::create_project_idea,
        crate::handlers::get_project_reports,
        crate::handlers::create_project_report,
        crate::handlers::get_post_comments,
        crate::handlers::create_post_comment,
        crate::handlers::get_conversation_messages,
        crate::handlers::create_conversation_message
    ),
    components(
        schemas(
            CreateIdeaRequest,
            CreateReportRequest,
            CreateCommentRequest,
            CreateMessageRequest,
            ReportStatus,
            IdeaResponse,
            ReportResponse,
            CommentResponse,
            MessageResponse,
            PageResponse<IdeaResponse>,
            PageResponse<ReportResponse>,
            PageResponse<CommentResponse>,
            PageResponse<MessageResponse>,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/projects/{id}/ideas",
            "/api/projects/{id}/reports",
            "/api/posts/{id}/comments",
            "/api/conversations/{id}/messages",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
