//! Database repositories for data access layer
//!
//! The upload pipeline talks to [`VideoRepository`]; production wires in
//! [`PgVideoRepository`], tests use the in-memory repository behind the
//! `test-helpers` feature.

pub mod video;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use video::{PgVideoRepository, VideoRepository};
