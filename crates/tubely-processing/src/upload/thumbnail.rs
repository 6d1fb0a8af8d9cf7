use std::sync::Arc;

use chrono::Utc;
use tubely_core::models::Video;
use tubely_core::AppError;
use tubely_db::VideoRepository;
use tubely_storage::{asset_key, extension_for_content_type, Storage, UrlResolver};
use uuid::Uuid;

use super::access::authorize_owner;
use super::types::ThumbnailUpload;
use crate::validator::MediaValidator;

/// Stores thumbnail images in the assets store and links them to their video
pub struct ThumbnailUploader {
    videos: Arc<dyn VideoRepository>,
    assets: Arc<dyn Storage>,
    urls: UrlResolver,
    validator: MediaValidator,
}

impl ThumbnailUploader {
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        assets: Arc<dyn Storage>,
        urls: UrlResolver,
        validator: MediaValidator,
    ) -> Self {
        Self {
            videos,
            assets,
            urls,
            validator,
        }
    }

    #[tracing::instrument(skip_all, fields(video_id = %video_id, user_id = %caller))]
    pub async fn upload(
        &self,
        caller: Uuid,
        video_id: Uuid,
        upload: ThumbnailUpload,
    ) -> Result<Video, AppError> {
        let content_type = self
            .validator
            .validate_content_type(upload.content_type.as_deref())?;
        self.validator.validate_file_size(upload.data.len())?;
        let extension = extension_for_content_type(&content_type)
            .ok_or_else(|| AppError::BadRequest("Invalid media type".to_string()))?;

        authorize_owner(self.videos.as_ref(), video_id, caller, "thumbnail").await?;

        let key = asset_key(extension);
        let url = self
            .assets
            .upload_with_key(&key, upload.data, &content_type)
            .await?;

        let mut video = authorize_owner(self.videos.as_ref(), video_id, caller, "thumbnail").await?;
        video.thumbnail_url = Some(url);
        video.updated_at = Utc::now().max(video.updated_at + chrono::Duration::microseconds(1));
        let video = self.videos.update_video(&video).await?;

        tracing::info!(key = %key, "Thumbnail stored");

        self.urls.resolve_video(video).await
    }
}
