//! Services organized by domain concern.

pub mod comment_service;
pub mod message_service;
pub mod page_fetch;
pub mod project_service;

pub use comment_service::CommentService;
pub use message_service::MessageService;
pub use page_fetch::fetch_page;
pub use project_service::ProjectService;
