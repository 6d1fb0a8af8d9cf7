use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tubely_storage::{Storage, StorageBackend, StorageError, StorageResult};

pub const TEST_BUCKET: &str = "tubely-test";

/// One object written through `RecordingStorage`
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// In-memory object store that behaves like an S3 bucket and records every write
#[derive(Clone, Default)]
pub struct RecordingStorage {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    fail_uploads: Arc<Mutex<bool>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn fail_uploads(&self) {
        *self.fail_uploads.lock().unwrap() = true;
    }

    pub fn public_url(key: &str) -> String {
        format!("https://{}.s3.us-east-2.amazonaws.com/{}", TEST_BUCKET, key)
    }

    fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<String> {
        if *self.fail_uploads.lock().unwrap() {
            return Err(StorageError::UploadFailed("bucket unavailable".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(Self::public_url(key))
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }

    fn bucket(&self) -> Option<&str> {
        Some(TEST_BUCKET)
    }

    async fn upload_file(
        &self,
        storage_key: &str,
        local_path: &Path,
        content_type: &str,
    ) -> StorageResult<String> {
        let data = tokio::fs::read(local_path).await?;
        self.put(storage_key, data, content_type)
    }

    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        self.put(storage_key, data, content_type)
    }

    async fn get_presigned_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://signed.example/{}?expires_in={}",
            storage_key,
            expires_in.as_secs()
        ))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        self.objects.lock().unwrap().remove(storage_key);
        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.objects.lock().unwrap().contains_key(storage_key))
    }
}
