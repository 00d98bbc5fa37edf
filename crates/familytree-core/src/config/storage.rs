//! Photo storage configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded photos live and how they are referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded photos are written to.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Prefix of the reference stored in `image_file`; also the URL path
    /// the directory is served under.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum request body size in bytes (default 16 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_upload_dir() -> String {
    "./static/uploads".to_string()
}

fn default_public_prefix() -> String {
    "uploads".to_string()
}

fn default_max_upload() -> u64 {
    16_777_216 // 16 MB
}
