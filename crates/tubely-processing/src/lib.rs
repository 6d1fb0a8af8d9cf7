//! Tubely Processing Library
//!
//! Media validation, the ffprobe/ffmpeg tool wrappers, and the upload flows
//! that stage, probe, remux, store and commit uploaded media.

pub mod upload;
pub mod validator;
pub mod video;

pub use upload::{
    authorize_owner, PipelineSettings, StagedFile, ThumbnailUpload, ThumbnailUploader,
    UploadStage, VideoUpload, VideoUploadPipeline,
};
pub use validator::{MediaValidator, ValidationError};
pub use video::{
    classify, AspectRatio, Dimensions, FastStartTranscoder, FfmpegFastStart, FfprobeProber,
    MediaProber, ToolError,
};
