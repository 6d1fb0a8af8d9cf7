//! In-memory repository implementations for testing
//!
//! These let the upload pipeline and HTTP handlers run without a database.

use crate::VideoRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tubely_core::models::{CreateVideoParams, Video};
use tubely_core::AppError;
use uuid::Uuid;

/// In-memory video repository for testing without database
#[derive(Clone, Default)]
pub struct MockVideoRepository {
    videos: Arc<Mutex<HashMap<Uuid, Video>>>,
    updates: Arc<Mutex<usize>>,
    fail_updates: Arc<Mutex<bool>>,
}

impl MockVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_video(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    /// Insert a fresh draft owned by `user_id` and return it
    pub fn seed(&self, user_id: Uuid) -> Video {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            user_id,
            title: "Boots".to_string(),
            description: "A walk through the boots catalog".to_string(),
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        };
        self.add_video(video.clone());
        video
    }

    pub fn snapshot(&self, id: Uuid) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }

    /// Number of successful `update_video` calls
    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap()
    }

    /// Make every subsequent `update_video` fail with a database-style error
    pub fn fail_updates(&self) {
        *self.fail_updates.lock().unwrap() = true;
    }
}

#[async_trait]
impl VideoRepository for MockVideoRepository {
    async fn create_video(
        &self,
        user_id: Uuid,
        params: CreateVideoParams,
    ) -> Result<Video, AppError> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            user_id,
            title: params.title,
            description: params.description,
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        };
        self.add_video(video.clone());
        Ok(video)
    }

    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.snapshot(id))
    }

    async fn update_video(&self, video: &Video) -> Result<Video, AppError> {
        if *self.fail_updates.lock().unwrap() {
            return Err(AppError::Internal("update rejected by test repository".into()));
        }

        let mut videos = self.videos.lock().unwrap();
        match videos.get_mut(&video.id) {
            Some(existing) => {
                *existing = video.clone();
                *self.updates.lock().unwrap() += 1;
                Ok(video.clone())
            }
            None => Err(AppError::NotFound("Couldn't find video".to_string())),
        }
    }

    async fn list_videos_for_user(&self, user_id: Uuid) -> Result<Vec<Video>, AppError> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }
}
