//! Application state shared by every handler.
//!
//! Built once at startup and never mutated; handlers receive it as `Arc<AppState>`.

use crate::auth::JwtService;
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoRepository;
use tubely_processing::{ThumbnailUploader, VideoUploadPipeline};
use tubely_storage::UrlResolver;

pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    pub video_uploads: VideoUploadPipeline,
    pub thumbnail_uploads: ThumbnailUploader,
    pub urls: UrlResolver,
    pub jwt: JwtService,
}
