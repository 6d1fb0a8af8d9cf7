use super::tool::{run_tool, ToolError};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Rewrites an MP4 so its index sits at the front of the file
#[async_trait]
pub trait FastStartTranscoder: Send + Sync {
    /// Write a fast-start copy of `input` to `output`. The caller owns `output`.
    async fn remux(&self, input: &Path, output: &Path) -> Result<(), ToolError>;
}

/// Output location for the remuxed copy of `input`: `{input}.processing`
pub fn processed_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".processing");
    PathBuf::from(path)
}

/// `ffmpeg -nostdin -y -i <input> -c copy -movflags faststart -f mp4 <output>`
pub struct FfmpegFastStart {
    ffmpeg_path: String,
}

impl FfmpegFastStart {
    pub fn new(ffmpeg_path: String) -> Self {
        Self { ffmpeg_path }
    }
}

#[async_trait]
impl FastStartTranscoder for FfmpegFastStart {
    #[tracing::instrument(skip(self), fields(tool = %self.ffmpeg_path))]
    async fn remux(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        let start = std::time::Instant::now();
        let args: [&OsStr; 11] = [
            OsStr::new("-nostdin"),
            OsStr::new("-y"),
            OsStr::new("-i"),
            input.as_os_str(),
            OsStr::new("-c"),
            OsStr::new("copy"),
            OsStr::new("-movflags"),
            OsStr::new("faststart"),
            OsStr::new("-f"),
            OsStr::new("mp4"),
            output.as_os_str(),
        ];

        run_tool(&self.ffmpeg_path, &args).await?;

        tracing::debug!(
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Remuxed video for fast start"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_path_appends_suffix() {
        assert_eq!(
            processed_path(Path::new("/tmp/tubely-upload-abc.mp4")),
            PathBuf::from("/tmp/tubely-upload-abc.mp4.processing")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failure_reports_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ffmpeg");
        std::fs::write(&script, "#!/bin/sh\necho 'Invalid data found' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let transcoder = FfmpegFastStart::new(script.to_string_lossy().to_string());
        let err = transcoder
            .remux(Path::new("in.mp4"), &dir.path().join("out.mp4"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid data found"));
    }
}
