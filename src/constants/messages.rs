//! Success message constants used throughout the application.

pub const MSG_IDEA_CREATED: &str = "Idea submitted successfully";
pub const MSG_REPORT_CREATED: &str = "Issue report submitted successfully";
pub const MSG_COMMENT_CREATED: &str = "Comment posted successfully";
pub const MSG_MESSAGE_SENT: &str = "Message sent successfully";
