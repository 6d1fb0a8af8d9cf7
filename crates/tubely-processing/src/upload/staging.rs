//! Temporary files backing an upload in flight.
//!
//! Both guards delete their file when dropped, so every exit path of the
//! pipeline (errors, panics, a dropped request future) cleans up.

use crate::video::processed_path;
use std::io;
use std::path::Path;
use tempfile::TempPath;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tubely_core::AppError;

const STAGING_PREFIX: &str = "tubely-upload-";
const STAGING_SUFFIX: &str = ".mp4";
const COPY_BUFFER_BYTES: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("upload exceeds {max} bytes")]
    TooLarge { max: u64 },

    #[error("failed to read upload body: {0}")]
    Body(#[source] io::Error),

    #[error("failed to write staged file: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("request body limit exceeded")]
struct BodyLimitExceeded;

/// Error a body stream yields when the transport cut it off for size.
pub fn body_limit_exceeded() -> io::Error {
    io::Error::other(BodyLimitExceeded)
}

fn is_body_limit(err: &io::Error) -> bool {
    err.get_ref()
        .is_some_and(|inner| inner.is::<BodyLimitExceeded>())
}

impl From<StagingError> for AppError {
    fn from(err: StagingError) -> Self {
        match err {
            StagingError::TooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            StagingError::Body(ref e) if is_body_limit(e) => {
                AppError::PayloadTooLarge(err.to_string())
            }
            StagingError::Body(_) => AppError::BadRequest(format!("Couldn't read upload: {}", err)),
            StagingError::Io(e) => AppError::Internal(format!("Couldn't stage upload: {}", e)),
        }
    }
}

/// The raw upload, written once to a uniquely named temp file
#[derive(Debug)]
pub struct StagedFile {
    path: TempPath,
    size: u64,
}

impl StagedFile {
    /// Stream `body` into a new temp file under `dir`, refusing more than `max_bytes`.
    pub async fn stage<R>(dir: Option<&Path>, mut body: R, max_bytes: u64) -> Result<Self, StagingError>
    where
        R: AsyncRead + Unpin,
    {
        let named = match dir {
            Some(dir) => tempfile::Builder::new()
                .prefix(STAGING_PREFIX)
                .suffix(STAGING_SUFFIX)
                .tempfile_in(dir)?,
            None => tempfile::Builder::new()
                .prefix(STAGING_PREFIX)
                .suffix(STAGING_SUFFIX)
                .tempfile()?,
        };
        let (file, path) = named.into_parts();
        let mut file = tokio::fs::File::from_std(file);

        let mut buf = vec![0u8; COPY_BUFFER_BYTES];
        let mut size: u64 = 0;
        loop {
            let n = body.read(&mut buf).await.map_err(StagingError::Body)?;
            if n == 0 {
                break;
            }
            size += n as u64;
            if size > max_bytes {
                return Err(StagingError::TooLarge { max: max_bytes });
            }
            file.write_all(&buf[..n]).await?;
        }

        file.flush().await?;
        file.sync_all().await?;

        Ok(Self { path, size })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Remuxed output at `{staged}.processing`; guarded before the tool runs so
/// partial output is removed too.
#[derive(Debug)]
pub struct ProcessedFile {
    path: TempPath,
}

impl ProcessedFile {
    pub fn alongside(staged: &StagedFile) -> Result<Self, StagingError> {
        let path = TempPath::try_from_path(processed_path(staged.path()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
