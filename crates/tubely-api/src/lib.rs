//! Tubely API library
//!
//! HTTP surface of the Tubely media service: JWT authentication, video
//! drafts, and the thumbnail and video upload endpoints. Exposed as a library
//! so integration tests can build the router around in-memory fakes.

mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
mod telemetry;
mod utils;

pub use error::{ErrorResponse, HttpAppError};
