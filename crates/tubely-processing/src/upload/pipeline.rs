//! Video upload pipeline
//!
//! `Received → Staged → Probed → Transcoded → Uploaded → Committed`, with
//! `Aborted` reachable from every non-terminal stage. Ownership is checked
//! before the body is staged and again right before the record is written.

use std::sync::Arc;

use chrono::Utc;
use tokio::io::AsyncRead;
use tubely_core::models::Video;
use tubely_core::AppError;
use tubely_db::VideoRepository;
use tubely_storage::{extension_for_content_type, object_key, Storage, UrlResolver};
use uuid::Uuid;

use super::access::authorize_owner;
use super::staging::{ProcessedFile, StagedFile};
use super::types::{PipelineSettings, UploadStage, VideoUpload};
use crate::validator::MediaValidator;
use crate::video::{classify, FastStartTranscoder, MediaProber};

pub struct VideoUploadPipeline {
    videos: Arc<dyn VideoRepository>,
    storage: Arc<dyn Storage>,
    prober: Arc<dyn MediaProber>,
    transcoder: Arc<dyn FastStartTranscoder>,
    urls: UrlResolver,
    validator: MediaValidator,
    settings: PipelineSettings,
}

impl VideoUploadPipeline {
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        storage: Arc<dyn Storage>,
        prober: Arc<dyn MediaProber>,
        transcoder: Arc<dyn FastStartTranscoder>,
        urls: UrlResolver,
        validator: MediaValidator,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            videos,
            storage,
            prober,
            transcoder,
            urls,
            validator,
            settings,
        }
    }

    /// Run one upload for `caller` against `video_id` and return the committed
    /// record with its video URL resolved for the client.
    #[tracing::instrument(skip_all, fields(video_id = %video_id, user_id = %caller))]
    pub async fn run<R>(
        &self,
        caller: Uuid,
        video_id: Uuid,
        upload: VideoUpload<R>,
    ) -> Result<Video, AppError>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut stage = UploadStage::Received;
        let start = std::time::Instant::now();

        match self.execute(caller, video_id, upload, &mut stage).await {
            Ok(video) => {
                tracing::info!(
                    stage = %UploadStage::Committed,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Video upload committed"
                );
                self.urls.resolve_video(video).await
            }
            Err(err) => {
                tracing::warn!(
                    stage = %UploadStage::Aborted,
                    failed_after = %stage,
                    error = %err,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Video upload aborted"
                );
                Err(err)
            }
        }
    }

    async fn execute<R>(
        &self,
        caller: Uuid,
        video_id: Uuid,
        upload: VideoUpload<R>,
        stage: &mut UploadStage,
    ) -> Result<Video, AppError>
    where
        R: AsyncRead + Unpin + Send,
    {
        let content_type = self
            .validator
            .validate_content_type(upload.content_type.as_deref())?;
        let extension = extension_for_content_type(&content_type)
            .ok_or_else(|| AppError::BadRequest("Invalid media type".to_string()))?
            .to_string();

        authorize_owner(self.videos.as_ref(), video_id, caller, "video").await?;

        let staged = StagedFile::stage(
            self.settings.staging_dir.as_deref(),
            upload.body,
            self.settings.max_video_bytes,
        )
        .await?;
        advance(stage, UploadStage::Staged);
        tracing::debug!(size_bytes = staged.size(), path = %staged.path().display(), "Upload staged");

        let dimensions = self.prober.probe(staged.path()).await?;
        let aspect = classify(dimensions.width, dimensions.height);
        advance(stage, UploadStage::Probed);
        tracing::debug!(
            width = dimensions.width,
            height = dimensions.height,
            aspect = %aspect,
            "Upload probed"
        );

        let processed = ProcessedFile::alongside(&staged)?;
        self.transcoder
            .remux(staged.path(), processed.path())
            .await?;
        advance(stage, UploadStage::Transcoded);

        let key = object_key(aspect.as_str(), &extension);
        let public_url = self
            .storage
            .upload_file(&key, processed.path(), &content_type)
            .await?;
        advance(stage, UploadStage::Uploaded);

        let reference = self.urls.reference_for(&key, public_url)?;
        match self.commit(caller, video_id, reference).await {
            Ok(video) => Ok(video),
            Err(err) => {
                self.discard_orphan(&key).await;
                Err(err)
            }
        }
    }

    /// Re-read the record so concurrent edits to other columns survive; last writer wins.
    async fn commit(
        &self,
        caller: Uuid,
        video_id: Uuid,
        reference: String,
    ) -> Result<Video, AppError> {
        let mut video = authorize_owner(self.videos.as_ref(), video_id, caller, "video").await?;
        video.video_url = Some(reference);
        video.updated_at = Utc::now().max(video.updated_at + chrono::Duration::microseconds(1));
        self.videos.update_video(&video).await
    }

    async fn discard_orphan(&self, key: &str) {
        if let Err(e) = self.storage.delete(key).await {
            tracing::warn!(key = %key, error = %e, "Failed to remove orphaned upload");
        }
    }
}

fn advance(stage: &mut UploadStage, next: UploadStage) {
    tracing::debug!(from = %stage, to = %next, "Upload stage transition");
    *stage = next;
}
