//! Data models organized by type.

pub mod comment;
pub mod idea;
pub mod listing;
pub mod message;
pub mod report;
pub mod requests;
pub mod responses;

pub use comment::*;
pub use idea::*;
pub use listing::*;
pub use message::*;
pub use report::*;
pub use requests::*;
pub use responses::*;
