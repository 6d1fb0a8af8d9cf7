use tubely_core::models::Video;
use tubely_core::AppError;
use tubely_db::VideoRepository;
use uuid::Uuid;

/// Load `video_id` and make sure `caller` owns it.
///
/// `subject` names what is being changed in the Forbidden message ("video", "thumbnail").
pub async fn authorize_owner(
    videos: &dyn VideoRepository,
    video_id: Uuid,
    caller: Uuid,
    subject: &str,
) -> Result<Video, AppError> {
    let video = videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't find video".to_string()))?;

    if !video.is_owned_by(caller) {
        tracing::warn!(
            video_id = %video_id,
            user_id = %caller,
            owner_id = %video.user_id,
            "Rejected upload from non-owner"
        );
        return Err(AppError::Forbidden(format!(
            "You don't have permission to upload this {}",
            subject
        )));
    }

    Ok(video)
}
