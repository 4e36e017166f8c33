//! Custom validators for submitted content.

use validator::ValidationError;

use crate::constants::{ERR_BLANK_TEXT, ERR_INVALID_REPORT_STATUS, ERR_TITLE_LENGTH};
use crate::models::ReportStatus;

/// Rejects text made only of whitespace.
pub fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(ERR_BLANK_TEXT.into());
        return Err(error);
    }
    Ok(())
}

/// Titles are stored trimmed, so the 3-120 character bound applies to the trimmed text.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.trim().chars().count();
    if !(3..=120).contains(&length) {
        let mut error = ValidationError::new("length");
        error.message = Some(ERR_TITLE_LENGTH.into());
        return Err(error);
    }
    Ok(())
}

/// Custom validator for the report status field.
pub fn validate_report_status(status: &str) -> Result<(), ValidationError> {
    match ReportStatus::parse(status) {
        Some(_) => Ok(()),
        None => {
            let mut error = ValidationError::new("invalid_status");
            error.message = Some(ERR_INVALID_REPORT_STATUS.into());
            Err(error)
        }
    }
}
