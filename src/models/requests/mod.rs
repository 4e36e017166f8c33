//! Request models for API endpoints.

pub mod content;
pub mod pagination;

pub use content::*;
pub use pagination::*;
