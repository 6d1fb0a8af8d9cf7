use tubely_core::AppError;

/// Common validation errors for uploaded media
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Missing content type")]
    MissingContentType,

    #[error("Empty file")]
    EmptyFile,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::FileTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            ValidationError::InvalidContentType { .. } | ValidationError::MissingContentType => {
                AppError::BadRequest(format!("Invalid media type: {}", err))
            }
            ValidationError::EmptyFile => AppError::BadRequest(err.to_string()),
        }
    }
}

/// Strip MIME parameters and normalize case: `Video/MP4; codecs="avc1"` -> `video/mp4`.
pub fn normalize_content_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Media upload validator
///
/// Checks run before any byte of the upload touches disk or the object store.
#[derive(Debug, Clone)]
pub struct MediaValidator {
    max_file_size: usize,
    allowed_content_types: Vec<String>,
}

impl MediaValidator {
    pub fn new(max_file_size: usize, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types: allowed_content_types
                .iter()
                .map(|ct| normalize_content_type(ct))
                .collect(),
        }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate a declared content type and return its normalized form
    pub fn validate_content_type(&self, content_type: Option<&str>) -> Result<String, ValidationError> {
        let declared = content_type.ok_or(ValidationError::MissingContentType)?;
        let normalized = normalize_content_type(declared);

        if normalized.is_empty() {
            return Err(ValidationError::MissingContentType);
        }

        if !self.allowed_content_types.iter().any(|ct| ct == &normalized) {
            return Err(ValidationError::InvalidContentType {
                content_type: declared.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(normalized)
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_validator() -> MediaValidator {
        MediaValidator::new(1024, vec!["video/mp4".to_string()])
    }

    #[test]
    fn accepts_allowed_type_with_parameters() {
        let validator = video_validator();
        assert_eq!(
            validator
                .validate_content_type(Some("Video/MP4; codecs=\"avc1.42E01E\""))
                .unwrap(),
            "video/mp4"
        );
    }

    #[test]
    fn rejects_other_types() {
        let validator = video_validator();
        for ct in ["application/pdf", "video/quicktime", "video/mp4x", "video"] {
            let err = validator.validate_content_type(Some(ct)).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidContentType { .. }), "{}", ct);
            let app: AppError = err.into();
            assert!(matches!(app, AppError::BadRequest(_)));
        }
    }

    #[test]
    fn rejects_missing_type() {
        let validator = video_validator();
        assert!(matches!(
            validator.validate_content_type(None),
            Err(ValidationError::MissingContentType)
        ));
        assert!(matches!(
            validator.validate_content_type(Some("  ; charset=utf-8")),
            Err(ValidationError::MissingContentType)
        ));
    }

    #[test]
    fn size_limits() {
        let validator = video_validator();
        assert!(validator.validate_file_size(1024).is_ok());
        let app: AppError = validator.validate_file_size(1025).unwrap_err().into();
        assert!(matches!(app, AppError::PayloadTooLarge(_)));
        assert!(matches!(
            validator.validate_file_size(0),
            Err(ValidationError::EmptyFile)
        ));
    }
}
