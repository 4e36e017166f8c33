use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{CODE_BAD_REQUEST, CODE_NOT_FOUND};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::repositories::Repositories;
use crate::services::{CommentService, MessageService, ProjectService};

/// Services shared by every worker.
#[derive(Clone)]
pub struct AppServices {
    pub projects: web::Data<ProjectService>,
    pub comments: web::Data<CommentService>,
    pub messages: web::Data<MessageService>,
}

impl AppServices {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            projects: web::Data::new(ProjectService::new(repositories)),
            comments: web::Data::new(CommentService::new(repositories)),
            messages: web::Data::new(MessageService::new(repositories)),
        }
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.projects.clone())
            .app_data(self.comments.clone())
            .app_data(self.messages.clone());
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed query strings and bodies answer with the same JSON error shape as everything else
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(CODE_BAD_REQUEST, err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(CODE_BAD_REQUEST, err.to_string()).into()
    }));

    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .route("/openapi.json", web::get().to(openapi_json))
            .service(
                web::scope("/projects/{id}")
                    .route("/ideas", web::get().to(handlers::get_project_ideas))
                    .route("/ideas", web::post().to(handlers::create_project_idea))
                    .route("/reports", web::get().to(handlers::get_project_reports))
                    .route("/reports", web::post().to(handlers::create_project_report)),
            )
            .service(
                web::scope("/posts/{id}")
                    .route("/comments", web::get().to(handlers::get_post_comments))
                    .route("/comments", web::post().to(handlers::create_post_comment)),
            )
            .service(
                web::scope("/conversations/{id}")
                    .route("/messages", web::get().to(handlers::get_conversation_messages))
                    .route(
                        "/messages",
                        web::post().to(handlers::create_conversation_message),
                    ),
            ),
    )
    .default_service(web::to(not_found));
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::not_found(CODE_NOT_FOUND, "Resource not found"))
}
