//! Response models for API endpoints.

pub mod api;
pub mod content;
pub mod pagination;

pub use api::*;
pub use content::*;
pub use pagination::*;
