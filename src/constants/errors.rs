//! Error message constants used throughout the application.

// Identifier errors
pub const ERR_INVALID_PROJECT_ID: &str = "Invalid project ID format";
pub const ERR_INVALID_POST_ID: &str = "Invalid post ID format";
pub const ERR_INVALID_CONVERSATION_ID: &str = "Invalid conversation ID format";

// Lookup errors
pub const ERR_POST_NOT_FOUND: &str = "Post not found";

// Content errors
pub const ERR_BLANK_TEXT: &str = "Text must not be blank";
pub const ERR_TITLE_LENGTH: &str = "Title must be between 3 and 120 characters";
pub const ERR_INVALID_REPORT_STATUS: &str =
    "Status must be one of 'open', 'in_progress' or 'resolved'";

// Storage errors
pub const ERR_MISSING_INSERTED_ID: &str = "Store did not return an inserted ID";
