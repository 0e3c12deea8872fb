//! Content module
//!
//! This module loads the static team content file once at startup and exposes
//! it as a read-only document shared by every handler.

pub mod store;

pub use store::{ContentDocument, ContentStore};
