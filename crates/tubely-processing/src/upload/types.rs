//! Types for the upload flows.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Knobs for the video upload pipeline
#[derive(Clone, Debug)]
pub struct PipelineSettings {
    /// Where staged uploads are written; `None` uses the system temp dir
    pub staging_dir: Option<PathBuf>,
    pub max_video_bytes: u64,
}

/// Incoming video: declared content type plus the raw body stream
pub struct VideoUpload<R> {
    pub content_type: Option<String>,
    pub body: R,
}

/// Incoming thumbnail, already buffered
#[derive(Clone, Debug)]
pub struct ThumbnailUpload {
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Lifecycle of one video upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Received,
    Staged,
    Probed,
    Transcoded,
    Uploaded,
    Committed,
    Aborted,
}

impl Display for UploadStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            UploadStage::Received => "received",
            UploadStage::Staged => "staged",
            UploadStage::Probed => "probed",
            UploadStage::Transcoded => "transcoded",
            UploadStage::Uploaded => "uploaded",
            UploadStage::Committed => "committed",
            UploadStage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}
