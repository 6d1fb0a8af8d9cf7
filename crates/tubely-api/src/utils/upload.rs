//! Multipart helpers shared by the upload handlers

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use std::io;
use tubely_core::AppError;
use tubely_processing::upload::body_limit_exceeded;

/// Map a failure to read the multipart envelope itself
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(format!("Couldn't parse form: {}", err.body_text()))
    }
}

/// Map a failure while streaming a part's body, keeping the transport limit recognizable
pub fn field_stream_error(err: MultipartError) -> io::Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        body_limit_exceeded()
    } else {
        io::Error::other(err.body_text())
    }
}

/// `Path` parameters arrive as text so a malformed id becomes our 400, not axum's
pub fn parse_video_id(raw: &str) -> Result<uuid::Uuid, AppError> {
    uuid::Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_video_ids() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_video_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_video_id("not-a-uuid"), Err(AppError::BadRequest(_))));
    }
}
