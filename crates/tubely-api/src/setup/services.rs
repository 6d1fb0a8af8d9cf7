//! Service and repository wiring

use crate::auth::JwtService;
use crate::setup::storage::StorageHandles;
use crate::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::{PgVideoRepository, VideoRepository};
use tubely_processing::{
    FastStartTranscoder, FfmpegFastStart, FfprobeProber, MediaProber, MediaValidator,
    PipelineSettings, ThumbnailUploader, VideoUploadPipeline,
};
use tubely_storage::UrlResolver;

/// External media tools used by the video pipeline
pub struct MediaTools {
    pub prober: Arc<dyn MediaProber>,
    pub transcoder: Arc<dyn FastStartTranscoder>,
}

impl MediaTools {
    pub fn from_config(config: &Config) -> Self {
        Self {
            prober: Arc::new(FfprobeProber::new(config.ffprobe_path().to_string())),
            transcoder: Arc::new(FfmpegFastStart::new(config.ffmpeg_path().to_string())),
        }
    }
}

/// Assemble the shared state from already-constructed backends.
pub fn build_app_state(
    config: Config,
    videos: Arc<dyn VideoRepository>,
    storage: StorageHandles,
    tools: MediaTools,
) -> Arc<AppState> {
    let urls = UrlResolver::new(
        config.video_url_strategy(),
        storage.videos.clone(),
        config.signed_url_ttl(),
    );

    let video_uploads = VideoUploadPipeline::new(
        videos.clone(),
        storage.videos,
        tools.prober,
        tools.transcoder,
        urls.clone(),
        MediaValidator::new(
            config.max_video_size_bytes(),
            config.video_allowed_content_types().to_vec(),
        ),
        PipelineSettings {
            staging_dir: config.upload_staging_dir().map(|dir| dir.to_path_buf()),
            max_video_bytes: config.max_video_size_bytes() as u64,
        },
    );

    let thumbnail_uploads = ThumbnailUploader::new(
        videos.clone(),
        storage.assets,
        urls.clone(),
        MediaValidator::new(
            config.max_thumbnail_size_bytes(),
            config.thumbnail_allowed_content_types().to_vec(),
        ),
    );

    let jwt = JwtService::new(config.jwt_secret(), config.jwt_expiry_hours());

    Arc::new(AppState {
        config,
        videos,
        video_uploads,
        thumbnail_uploads,
        urls,
        jwt,
    })
}

/// Initialize repositories and services against Postgres and the real media tools
pub async fn initialize_services(
    config: &Config,
    pool: PgPool,
    storage: StorageHandles,
) -> anyhow::Result<Arc<AppState>> {
    let videos: Arc<dyn VideoRepository> = Arc::new(PgVideoRepository::new(pool));
    let tools = MediaTools::from_config(config);

    tracing::info!(
        ffprobe_path = %config.ffprobe_path(),
        ffmpeg_path = %config.ffmpeg_path(),
        "Media tools configured"
    );

    Ok(build_app_state(config.clone(), videos, storage, tools))
}
