//! Handlers for a project's ideas and issue reports.

use actix_web::{web, HttpResponse};
use log::debug;
use validator::Validate;

use crate::constants::{MSG_IDEA_CREATED, MSG_REPORT_CREATED};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, CreateIdeaRequest, CreateReportRequest, PageQuery, PageResponse,
};
use crate::services::ProjectService;
use crate::validators::validation_errors_to_api_error;

/// List a project's ideas, newest first
#[utoipa::path(
    get,
    path = "/api/projects/{id}/ideas",
    tag = "Ideas",
    params(
        ("id" = String, Path, description = "Project ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of ideas", body = PageResponse<crate::models::IdeaResponse>),
        (status = 400, description = "Invalid project ID or pagination", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_project_ideas(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let request = query.resolve()?;
    debug!("Fetching ideas page {} for project {}", request.page, project_id);

    let page = project_service.list_ideas(&project_id, request).await?;
    Ok(HttpResponse::Ok().json(PageResponse::new(page, request)))
}

/// Submit an idea for a project
#[utoipa::path(
    post,
    path = "/api/projects/{id}/ideas",
    tag = "Ideas",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    request_body = CreateIdeaRequest,
    responses(
        (status = 201, description = "Idea submitted", body = crate::models::IdeaResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_project_idea(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    body: web::Json<CreateIdeaRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let idea = project_service
        .create_idea(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_IDEA_CREATED, idea)))
}

/// List a project's issue reports, newest first
#[utoipa::path(
    get,
    path = "/api/projects/{id}/reports",
    tag = "Reports",
    params(
        ("id" = String, Path, description = "Project ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of issue reports", body = PageResponse<crate::models::ReportResponse>),
        (status = 400, description = "Invalid project ID or pagination", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_project_reports(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let request = query.resolve()?;
    debug!("Fetching reports page {} for project {}", request.page, project_id);

    let page = project_service.list_reports(&project_id, request).await?;
    Ok(HttpResponse::Ok().json(PageResponse::new(page, request)))
}

/// File an issue report against a project
#[utoipa::path(
    post,
    path = "/api/projects/{id}/reports",
    tag = "Reports",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report filed", body = crate::models::ReportResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_project_report(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    body: web::Json<CreateReportRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let report = project_service
        .create_report(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_REPORT_CREATED, report)))
}
