//! Client-side access to the paginated list endpoints.
//!
//! [`PageController`] owns the state of one paginated list and drives a
//! [`PageFetcher`]; [`HttpPageFetcher`] is the fetcher that talks to this
//! service over HTTP.

pub mod controller;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod state;

pub use controller::PageController;
pub use error::ClientError;
pub use fetcher::{FetchOutcome, PageFetcher};
pub use http::HttpPageFetcher;
pub use state::FetchState;
