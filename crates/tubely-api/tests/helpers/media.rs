use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tubely_processing::{Dimensions, FastStartTranscoder, MediaProber, ToolError};

/// Prober that reports fixed geometry, or no streams when `dimensions` is `None`
#[derive(Clone)]
pub struct FakeProber {
    dimensions: Option<Dimensions>,
    calls: Arc<AtomicUsize>,
}

impl FakeProber {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dimensions: Some(Dimensions { width, height }),
            calls: Arc::default(),
        }
    }

    pub fn without_streams() -> Self {
        Self {
            dimensions: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaProber for FakeProber {
    async fn probe(&self, path: &Path) -> Result<Dimensions, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(path.exists(), "probe ran against a missing staged file");
        self.dimensions.ok_or(ToolError::NoStreams)
    }
}

/// Transcoder that copies its input verbatim and prefixes a marker so tests
/// can tell the remuxed copy from the original upload
#[derive(Clone, Default)]
pub struct CopyTranscoder {
    calls: Arc<AtomicUsize>,
}

pub const REMUX_MARKER: &[u8] = b"faststart:";

impl CopyTranscoder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FastStartTranscoder for CopyTranscoder {
    async fn remux(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut data = REMUX_MARKER.to_vec();
        data.extend(tokio::fs::read(input).await.map_err(|source| ToolError::Spawn {
            tool: "copy".to_string(),
            source,
        })?);
        tokio::fs::write(output, data)
            .await
            .map_err(|source| ToolError::Spawn {
                tool: "copy".to_string(),
                source,
            })
    }
}
