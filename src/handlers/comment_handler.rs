//! Handlers for comments on ideas and issue reports.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::MSG_COMMENT_CREATED;
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateCommentRequest, PageQuery, PageResponse};
use crate::services::CommentService;
use crate::validators::validation_errors_to_api_error;

/// List a post's comments, oldest first
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    tag = "Comments",
    params(
        ("id" = String, Path, description = "Idea or report ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of comments", body = PageResponse<crate::models::CommentResponse>),
        (status = 400, description = "Invalid post ID or pagination", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_post_comments(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = query.resolve()?;
    let page = comment_service
        .list_comments(&path.into_inner(), request)
        .await?;
    Ok(HttpResponse::Ok().json(PageResponse::new(page, request)))
}

/// Comment on an idea or issue report
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    tag = "Comments",
    params(
        ("id" = String, Path, description = "Idea or report ID")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment posted", body = crate::models::CommentResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "Post not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_post_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let comment = comment_service
        .create_comment(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_COMMENT_CREATED, comment)))
}
