//! Storage setup

use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_storage::{create_asset_storage, create_storage, Storage};

/// Video object store and thumbnail asset store
pub struct StorageHandles {
    pub videos: Arc<dyn Storage>,
    pub assets: Arc<dyn Storage>,
}

pub async fn setup_storage(config: &Config) -> Result<StorageHandles> {
    let videos = create_storage(config)
        .await
        .context("Failed to initialize video storage")?;
    let assets = create_asset_storage(config)
        .await
        .context("Failed to initialize asset storage")?;

    tracing::info!(
        backend = %videos.backend_type(),
        bucket = videos.bucket().unwrap_or("-"),
        assets_root = %config.assets_root().display(),
        url_strategy = ?config.video_url_strategy(),
        "Storage initialized"
    );

    Ok(StorageHandles { videos, assets })
}
