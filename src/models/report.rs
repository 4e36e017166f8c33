use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::constants::COLLECTION_REPORTS;
use crate::models::{Listing, SortOrder};

/// Lifecycle of an issue report
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Open => write!(f, "open"),
            ReportStatus::InProgress => write!(f, "in_progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl ReportStatus {
    /// Parse a status name, `None` when it is not a known status.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "open" => Some(ReportStatus::Open),
            "in_progress" => Some(ReportStatus::InProgress),
            "resolved" => Some(ReportStatus::Resolved),
            _ => None,
        }
    }
}

/// Issue report filed against a project
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IssueReport {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub project_id: ObjectId,
    pub author_id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
    pub created_at: mongodb::bson::DateTime,
}

impl Listing for IssueReport {
    const COLLECTION: &'static str = COLLECTION_REPORTS;
    const PARENT_FIELD: &'static str = "project_id";
    const ORDER: SortOrder = SortOrder::NewestFirst;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> ObjectId {
        self.project_id
    }

    fn created_at(&self) -> mongodb::bson::DateTime {
        self.created_at
    }
}
