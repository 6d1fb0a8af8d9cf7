use super::tool::{run_tool, ToolError};
use async_trait::async_trait;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::Path;

/// Frame geometry of the first stream in a media file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Reads frame geometry from a local media file
#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<Dimensions, ToolError>;
}

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// `ffprobe -v error -print_format json -show_streams <path>`
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }

    fn parse(stdout: &[u8]) -> Result<Dimensions, ToolError> {
        let output: FfprobeOutput = serde_json::from_slice(stdout)
            .map_err(|e| ToolError::InvalidOutput(e.to_string()))?;

        let first = output.streams.first().ok_or(ToolError::NoStreams)?;
        match (first.width, first.height) {
            (Some(width), Some(height)) => Ok(Dimensions { width, height }),
            _ => Err(ToolError::NoGeometry),
        }
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    #[tracing::instrument(skip(self), fields(tool = %self.ffprobe_path))]
    async fn probe(&self, path: &Path) -> Result<Dimensions, ToolError> {
        let args: [&OsStr; 6] = [
            OsStr::new("-v"),
            OsStr::new("error"),
            OsStr::new("-print_format"),
            OsStr::new("json"),
            OsStr::new("-show_streams"),
            path.as_os_str(),
        ];

        let output = run_tool(&self.ffprobe_path, &args).await?;
        let dimensions = Self::parse(&output.stdout)?;

        tracing::debug!(
            width = dimensions.width,
            height = dimensions.height,
            "Probed video dimensions"
        );

        Ok(dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_stream() {
        let json = br#"{"streams":[{"index":0,"codec_type":"video","width":1920,"height":1080},{"index":1,"codec_type":"audio"}]}"#;
        assert_eq!(
            FfprobeProber::parse(json).unwrap(),
            Dimensions {
                width: 1920,
                height: 1080
            }
        );
    }

    #[test]
    fn rejects_missing_streams_and_geometry() {
        assert!(matches!(
            FfprobeProber::parse(br#"{"streams":[]}"#),
            Err(ToolError::NoStreams)
        ));
        assert!(matches!(
            FfprobeProber::parse(br#"{}"#),
            Err(ToolError::NoStreams)
        ));
        assert!(matches!(
            FfprobeProber::parse(br#"{"streams":[{"codec_type":"audio"}]}"#),
            Err(ToolError::NoGeometry)
        ));
        assert!(matches!(
            FfprobeProber::parse(b"not json"),
            Err(ToolError::InvalidOutput(_))
        ));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let prober = FfprobeProber::new("/nonexistent/ffprobe".to_string());
        let err = prober.probe(Path::new("video.mp4")).await.unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stderr_on_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ffprobe");
        std::fs::write(&script, "#!/bin/sh\necho 'moov atom not found' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let prober = FfprobeProber::new(script.to_string_lossy().to_string());
        match prober.probe(Path::new("video.mp4")).await {
            Err(ToolError::Failed { stderr, .. }) => assert_eq!(stderr, "moov atom not found"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_ffprobe_with_json_output() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ffprobe");
        std::fs::write(
            &script,
            "#!/bin/sh\n[ \"$1 $2 $3 $4 $5\" = \"-v error -print_format json -show_streams\" ] || exit 2\necho '{\"streams\":[{\"width\":1080,\"height\":1920}]}'\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let prober = FfprobeProber::new(script.to_string_lossy().to_string());
        let dimensions = prober.probe(Path::new("video.mp4")).await.unwrap();
        assert_eq!(dimensions.width, 1080);
        assert_eq!(dimensions.height, 1920);
    }
}
