//! Video URL encoding and resolution
//!
//! A deployment persists video locations in exactly one of two encodings, picked by
//! [`VideoUrlStrategy`]. [`UrlResolver::reference_for`] produces the value to store,
//! [`UrlResolver::resolve`] turns a stored value back into something a client can fetch.

use crate::reference::StoredReference;
use crate::traits::Storage;
use std::sync::Arc;
use std::time::Duration;
use tubely_core::models::Video;
use tubely_core::{AppError, VideoUrlStrategy};

#[derive(Clone)]
pub struct UrlResolver {
    strategy: VideoUrlStrategy,
    storage: Arc<dyn Storage>,
    ttl: Duration,
}

impl UrlResolver {
    pub fn new(strategy: VideoUrlStrategy, storage: Arc<dyn Storage>, ttl: Duration) -> Self {
        Self {
            strategy,
            storage,
            ttl,
        }
    }

    pub fn strategy(&self) -> VideoUrlStrategy {
        self.strategy
    }

    /// Value to persist in `video_url` for an object just uploaded under `key`.
    pub fn reference_for(&self, key: &str, public_url: String) -> Result<String, AppError> {
        match self.strategy {
            VideoUrlStrategy::Public => Ok(public_url),
            VideoUrlStrategy::Signed => {
                let bucket = self.storage.bucket().ok_or_else(|| {
                    AppError::Signing(format!(
                        "{} storage has no bucket to reference",
                        self.storage.backend_type()
                    ))
                })?;
                Ok(StoredReference::new(bucket, key).to_string())
            }
        }
    }

    /// Turn a stored `video_url` into a client URL.
    pub async fn resolve(&self, stored: &str) -> Result<String, AppError> {
        match self.strategy {
            VideoUrlStrategy::Public => Ok(stored.to_string()),
            VideoUrlStrategy::Signed => {
                let reference: StoredReference = stored.parse().map_err(AppError::Signing)?;

                if self.storage.bucket() != Some(reference.bucket.as_str()) {
                    return Err(AppError::Signing(format!(
                        "bucket {} is not served by this storage backend",
                        reference.bucket
                    )));
                }

                self.storage
                    .get_presigned_url(&reference.key, self.ttl)
                    .await
                    .map_err(|e| {
                        AppError::Signing(format!(
                            "failed to presign {}: {}",
                            reference.key, e
                        ))
                    })
            }
        }
    }

    /// Copy of `video` with its `video_url` resolved. Records without one pass through.
    pub async fn resolve_video(&self, mut video: Video) -> Result<Video, AppError> {
        if let Some(stored) = video.video_url.take() {
            video.video_url = Some(self.resolve(&stored).await?);
        }
        Ok(video)
    }
}
