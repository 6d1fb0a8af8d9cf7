//! Upload flows: validate → authorize → stage → process → store → commit.

pub mod access;
pub mod pipeline;
pub mod staging;
pub mod thumbnail;
pub mod types;

pub use access::authorize_owner;
pub use pipeline::VideoUploadPipeline;
pub use staging::{body_limit_exceeded, ProcessedFile, StagedFile, StagingError};
pub use thumbnail::ThumbnailUploader;
pub use types::{PipelineSettings, ThumbnailUpload, UploadStage, VideoUpload};
