//! Request payloads for submitting ideas, reports, comments and messages.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_not_blank, validate_report_status, validate_title};

/// Request payload for submitting an idea to a project
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateIdeaRequest {
    /// Identifier of the submitting user
    #[validate(length(min = 1, max = 64, message = "Author ID is required"))]
    #[schema(example = "user-42")]
    pub author_id: String,
    /// Short title (3-120 characters once trimmed)
    #[validate(custom(function = "validate_title"))]
    #[schema(example = "Add a bike lane on Main Street")]
    pub title: String,
    /// Full description (max 5000 characters)
    #[validate(
        length(min = 1, max = 5000, message = "Description must be at most 5000 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "A protected lane would connect the station to the market.")]
    pub description: String,
}

/// Request payload for filing an issue report against a project
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReportRequest {
    /// Identifier of the reporting user
    #[validate(length(min = 1, max = 64, message = "Author ID is required"))]
    #[schema(example = "user-42")]
    pub author_id: String,
    /// Short title (3-120 characters once trimmed)
    #[validate(custom(function = "validate_title"))]
    #[schema(example = "Broken street light")]
    pub title: String,
    /// Full description (max 5000 characters)
    #[validate(
        length(min = 1, max = 5000, message = "Description must be at most 5000 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "The light at the corner of 5th and Elm is out.")]
    pub description: String,
    /// Where the issue was observed (max 200 characters)
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    #[schema(example = "5th and Elm")]
    pub location: Option<String>,
    /// Initial status, defaults to 'open'
    #[validate(custom(function = "validate_report_status"))]
    #[schema(example = "open")]
    pub status: Option<String>,
}

/// Request payload for commenting on an idea or report
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    /// Identifier of the commenting user
    #[validate(length(min = 1, max = 64, message = "Author ID is required"))]
    #[schema(example = "user-7")]
    pub author_id: String,
    /// Comment text (1-2000 characters)
    #[validate(
        length(min = 1, max = 2000, message = "Comment must be between 1 and 2000 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Great idea, I would use it daily.")]
    pub body: String,
}

/// Request payload for sending a message in a conversation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    /// Identifier of the sending user
    #[validate(length(min = 1, max = 64, message = "Sender ID is required"))]
    #[schema(example = "user-7")]
    pub sender_id: String,
    /// Message text (1-2000 characters)
    #[validate(
        length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Are you coming to the town hall on Thursday?")]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(title: &str) -> CreateIdeaRequest {
        CreateIdeaRequest {
            author_id: "user-1".to_string(),
            title: title.to_string(),
            description: "details".to_string(),
        }
    }

    #[test]
    fn test_title_length_counts_trimmed_text() {
        assert!(idea("Bike lane").validate().is_ok());
        assert!(idea("  Bus  ").validate().is_ok());

        let errors = idea(" a ").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(idea("    ").validate().is_err());
        assert!(idea(&format!(" {} ", "x".repeat(121))).validate().is_err());
        assert!(idea(&format!(" {} ", "x".repeat(120))).validate().is_ok());
    }
}
