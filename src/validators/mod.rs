//! Request validation helpers.

pub mod common;
pub mod content;

pub use common::*;
pub use content::*;
