//! Shared key generation for storage backends.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Number of random bytes behind every object identifier
const IDENTIFIER_BYTES: usize = 32;

/// 32 bytes from the thread-local CSPRNG, URL-safe base64 without padding.
pub fn random_identifier() -> String {
    let bytes: [u8; IDENTIFIER_BYTES] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Key for a processed video: `{partition}/{random}.{extension}`
pub fn object_key(partition: &str, extension: &str) -> String {
    format!("{}/{}.{}", partition, random_identifier(), extension)
}

/// Key for a flat asset such as a thumbnail: `{random}.{extension}`
pub fn asset_key(extension: &str) -> String {
    format!("{}.{}", random_identifier(), extension)
}

/// File extension for a validated content type: its subtype (`video/mp4` -> `mp4`).
pub fn extension_for_content_type(content_type: &str) -> Option<&str> {
    content_type
        .split_once('/')
        .map(|(_, subtype)| subtype.trim())
        .filter(|subtype| !subtype.is_empty())
}
