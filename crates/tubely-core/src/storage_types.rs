use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Storage backend types
///
/// Defined in core because configuration selects it and the storage crate builds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Local => write!(f, "local"),
        }
    }
}

/// How a video's `video_url` column is encoded for a deployment.
///
/// * `Signed` stores a compact `"{bucket},{key}"` reference that is turned into a
///   presigned URL every time a record is returned to a client.
/// * `Public` stores the object's fully qualified URL and returns it unchanged.
///
/// A deployment uses exactly one of the two for the lifetime of its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoUrlStrategy {
    Signed,
    Public,
}

impl FromStr for VideoUrlStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "signed" => Ok(VideoUrlStrategy::Signed),
            "public" => Ok(VideoUrlStrategy::Public),
            _ => Err(anyhow::anyhow!("Invalid video URL strategy: {}", s)),
        }
    }
}

impl Display for VideoUrlStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VideoUrlStrategy::Signed => write!(f, "signed"),
            VideoUrlStrategy::Public => write!(f, "public"),
        }
    }
}
