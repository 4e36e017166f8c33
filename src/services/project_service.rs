//! Ideas and issue reports submitted for a project.

use std::sync::Arc;

use futures::future::try_join_all;
use log::{debug, info};
use mongodb::bson::oid::ObjectId;

use crate::constants::ERR_INVALID_PROJECT_ID;
use crate::errors::ApiError;
use crate::models::{
    CreateIdeaRequest, CreateReportRequest, Comment, Idea, IdeaResponse, IssueReport,
    ReportResponse, ReportStatus,
};
use crate::pagination::{Page, PageRequest};
use crate::repositories::{ListingRepository, Repositories};
use crate::services::fetch_page;
use crate::validators::parse_object_id;

pub struct ProjectService {
    ideas: Arc<dyn ListingRepository<Idea>>,
    reports: Arc<dyn ListingRepository<IssueReport>>,
    comments: Arc<dyn ListingRepository<Comment>>,
}

impl ProjectService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            ideas: Arc::clone(&repositories.ideas),
            reports: Arc::clone(&repositories.reports),
            comments: Arc::clone(&repositories.comments),
        }
    }

    async fn comment_count(&self, post: Option<ObjectId>) -> Result<u64, ApiError> {
        match post {
            Some(id) => self.comments.count_by_parent(id).await,
            None => Ok(0),
        }
    }

    /// One page of a project's ideas, newest first, each with its comment count.
    pub async fn list_ideas(
        &self,
        project_id: &str,
        request: PageRequest,
    ) -> Result<Page<IdeaResponse>, ApiError> {
        let project = parse_object_id(project_id, ERR_INVALID_PROJECT_ID)?;
        debug!("Listing ideas for project {} ({:?})", project, request);

        let page = fetch_page(self.ideas.as_ref(), project, request).await?;
        let items = try_join_all(page.items.into_iter().map(|idea| async move {
            let comment_count = self.comment_count(idea.id).await?;
            Ok::<_, ApiError>(IdeaResponse::new(idea, comment_count))
        }))
        .await?;

        Ok(Page {
            items,
            total: page.total,
        })
    }

    pub async fn create_idea(
        &self,
        project_id: &str,
        req: CreateIdeaRequest,
    ) -> Result<IdeaResponse, ApiError> {
        let project = parse_object_id(project_id, ERR_INVALID_PROJECT_ID)?;

        let idea = self
            .ideas
            .insert(Idea {
                id: None,
                project_id: project,
                author_id: req.author_id,
                title: req.title.trim().to_string(),
                description: req.description.trim().to_string(),
                created_at: mongodb::bson::DateTime::now(),
            })
            .await?;

        info!("Idea {:?} submitted for project {}", idea.id, project);
        Ok(IdeaResponse::new(idea, 0))
    }

    /// One page of a project's issue reports, newest first, each with its comment count.
    pub async fn list_reports(
        &self,
        project_id: &str,
        request: PageRequest,
    ) -> Result<Page<ReportResponse>, ApiError> {
        let project = parse_object_id(project_id, ERR_INVALID_PROJECT_ID)?;
        debug!("Listing reports for project {} ({:?})", project, request);

        let page = fetch_page(self.reports.as_ref(), project, request).await?;
        let items = try_join_all(page.items.into_iter().map(|report| async move {
            let comment_count = self.comment_count(report.id).await?;
            Ok::<_, ApiError>(ReportResponse::new(report, comment_count))
        }))
        .await?;

        Ok(Page {
            items,
            total: page.total,
        })
    }

    pub async fn create_report(
        &self,
        project_id: &str,
        req: CreateReportRequest,
    ) -> Result<ReportResponse, ApiError> {
        let project = parse_object_id(project_id, ERR_INVALID_PROJECT_ID)?;
        let status = req
            .status
            .as_deref()
            .and_then(ReportStatus::parse)
            .unwrap_or_default();

        let report = self
            .reports
            .insert(IssueReport {
                id: None,
                project_id: project,
                author_id: req.author_id,
                title: req.title.trim().to_string(),
                description: req.description.trim().to_string(),
                location: req
                    .location
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty()),
                status,
                created_at: mongodb::bson::DateTime::now(),
            })
            .await?;

        info!(
            "Issue report {:?} filed for project {} with status {}",
            report.id, project, status
        );
        Ok(ReportResponse::new(report, 0))
    }
}
