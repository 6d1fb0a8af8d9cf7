use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{multipart_error, parse_video_id};
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tubely_core::models::Video;
use tubely_core::AppError;
use tubely_processing::ThumbnailUpload;

const THUMBNAIL_FIELD: &str = "thumbnail";

#[utoipa::path(
    post,
    path = "/api/thumbnail_upload/{videoID}",
    tag = "uploads",
    params(
        ("videoID" = String, Path, description = "Video draft ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored", body = Video),
        (status = 400, description = "Invalid ID, form or media type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid JWT", body = ErrorResponse),
        (status = 403, description = "Caller does not own the video", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(video_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Video>, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    tracing::info!(video_id = %video_id, user_id = %user.user_id, "Uploading thumbnail");

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(THUMBNAIL_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        let video = state
            .thumbnail_uploads
            .upload(
                user.user_id,
                video_id,
                ThumbnailUpload {
                    content_type,
                    data: data.to_vec(),
                },
            )
            .await?;

        return Ok(Json(video));
    }

    Err(AppError::BadRequest("Couldn't parse form: missing 'thumbnail' file".to_string()).into())
}
