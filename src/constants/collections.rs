//! MongoDB collection names.

pub const COLLECTION_IDEAS: &str = "ideas";
pub const COLLECTION_REPORTS: &str = "issue_reports";
pub const COLLECTION_COMMENTS: &str = "comments";
pub const COLLECTION_MESSAGES: &str = "messages";
