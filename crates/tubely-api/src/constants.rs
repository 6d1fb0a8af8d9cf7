//! API constants

/// API base path prefix
pub const API_PREFIX: &str = "/api";

/// Path under which thumbnails in `ASSETS_ROOT` are served
pub const ASSETS_PREFIX: &str = "/assets";

/// Headroom on top of the file size limit for multipart boundaries and part headers
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;
