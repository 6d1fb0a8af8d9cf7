use std::process::{Output, Stdio};
use tokio::process::Command;
use tubely_core::AppError;

/// Failures of the external media tools
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("unparsable ffprobe output: {0}")]
    InvalidOutput(String),

    #[error("no streams found")]
    NoStreams,

    #[error("first stream has no width/height")]
    NoGeometry,
}

impl From<ToolError> for AppError {
    fn from(err: ToolError) -> Self {
        AppError::MediaProcessing(err.to_string())
    }
}

/// Run `program` to completion with stdout and stderr captured.
///
/// A non-zero exit becomes [`ToolError::Failed`] carrying stderr, which is
/// logged here so every caller gets the tool's diagnostics in the logs.
pub(crate) async fn run_tool(program: &str, args: &[&std::ffi::OsStr]) -> Result<Output, ToolError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| ToolError::Spawn {
            tool: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::error!(
            tool = %program,
            status = %output.status,
            stderr = %stderr,
            "Media tool failed"
        );
        return Err(ToolError::Failed {
            tool: program.to_string(),
            status: output.status.to_string(),
            stderr,
        });
    }

    Ok(output)
}
