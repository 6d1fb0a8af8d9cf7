use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Compact `"{bucket},{key}"` reference persisted in place of a video URL when
/// URLs are signed on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReference {
    pub bucket: String,
    pub key: String,
}

impl StoredReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl FromStr for StoredReference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(bucket), Some(key), None) if !bucket.is_empty() && !key.is_empty() => {
                Ok(StoredReference::new(bucket, key))
            }
            _ => Err(format!("invalid video reference format: {}", s)),
        }
    }
}

impl Display for StoredReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{},{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_and_key() {
        let reference: StoredReference = "tubely-videos,landscape/abc.mp4".parse().unwrap();
        assert_eq!(reference.bucket, "tubely-videos");
        assert_eq!(reference.key, "landscape/abc.mp4");
        assert_eq!(reference.to_string(), "tubely-videos,landscape/abc.mp4");
    }

    #[test]
    fn rejects_malformed_references() {
        for input in [
            "",
            "bucket",
            "bucket,",
            ",key",
            "a,b,c",
            "https://example.com/landscape/abc.mp4",
        ] {
            assert!(input.parse::<StoredReference>().is_err(), "{}", input);
        }
    }
}
