//! Video inspection and remuxing via the ffmpeg toolchain

pub mod aspect;
pub mod faststart;
pub mod probe;
pub mod tool;

pub use aspect::{classify, AspectRatio};
pub use faststart::{processed_path, FastStartTranscoder, FfmpegFastStart};
pub use probe::{Dimensions, FfprobeProber, MediaProber};
pub use tool::ToolError;
