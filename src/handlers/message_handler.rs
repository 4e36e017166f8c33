//! Handlers for conversation messages.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::MSG_MESSAGE_SENT;
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateMessageRequest, PageQuery, PageResponse};
use crate::services::MessageService;
use crate::validators::validation_errors_to_api_error;

/// List a conversation's messages, oldest first
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    tag = "Messages",
    params(
        ("id" = String, Path, description = "Conversation ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of messages", body = PageResponse<crate::models::MessageResponse>),
        (status = 400, description = "Invalid conversation ID or pagination", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_conversation_messages(
    message_service: web::Data<MessageService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = query.resolve()?;
    let page = message_service
        .list_messages(&path.into_inner(), request)
        .await?;
    Ok(HttpResponse::Ok().json(PageResponse::new(page, request)))
}

/// Send a message in a conversation
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    tag = "Messages",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message sent", body = crate::models::MessageResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_conversation_message(
    message_service: web::Data<MessageService>,
    path: web::Path<String>,
    body: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let message = message_service
        .send_message(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_MESSAGE_SENT, message)))
}
