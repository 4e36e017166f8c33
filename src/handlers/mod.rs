//! HTTP request handlers organized by domain.

pub mod comment_handler;
pub mod message_handler;
pub mod project_handler;

pub use comment_handler::*;
pub use message_handler::*;
pub use project_handler::*;
