use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{field_stream_error, multipart_error, parse_video_id};
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use futures::TryStreamExt;
use std::sync::Arc;
use tokio_util::io::StreamReader;
use tubely_core::models::Video;
use tubely_core::AppError;
use tubely_processing::VideoUpload;

const VIDEO_FIELD: &str = "video";

#[utoipa::path(
    post,
    path = "/api/video_upload/{videoID}",
    tag = "uploads",
    params(
        ("videoID" = String, Path, description = "Video draft ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video processed and stored", body = Video),
        (status = 400, description = "Invalid ID, form or media type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid JWT", body = ErrorResponse),
        (status = 403, description = "Caller does not own the video", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "Video too large", body = ErrorResponse),
        (status = 500, description = "Processing or storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(video_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Video>, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    tracing::info!(video_id = %video_id, user_id = %user.user_id, "Uploading video");

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        // The body is streamed straight into the pipeline; nothing is buffered here.
        let content_type = field.content_type().map(str::to_string);
        let body = StreamReader::new(field.map_err(field_stream_error));

        let video = state
            .video_uploads
            .run(user.user_id, video_id, VideoUpload { content_type, body })
            .await?;

        return Ok(Json(video));
    }

    Err(AppError::BadRequest("Couldn't parse form: missing 'video' file".to_string()).into())
}
