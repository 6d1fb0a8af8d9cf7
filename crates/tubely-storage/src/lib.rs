//! Tubely Storage Library
//!
//! Storage abstraction plus S3 and local filesystem backends, object key
//! generation, and the stored-reference/URL resolution used for video URLs.
//!
//! # Storage key format
//!
//! Videos live under `{landscape|portrait|other}/{id}.{ext}` and thumbnails
//! under `{id}.{ext}`, where `id` is the URL-safe base64 (no padding) encoding
//! of 32 random bytes. Keys must not contain `..` or a leading `/`.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod reference;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;
pub mod url;

// Re-export commonly used types
#[cfg(feature = "storage-local")]
pub use factory::create_asset_storage;
pub use factory::create_storage;
pub use keys::{asset_key, extension_for_content_type, object_key, random_identifier};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use reference::StoredReference;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
pub use tubely_core::StorageBackend;
pub use url::UrlResolver;
