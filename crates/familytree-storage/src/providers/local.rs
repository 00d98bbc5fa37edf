//! Local filesystem photo store.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use familytree_core::error::{AppError, ErrorKind};
use familytree_core::result::AppResult;
use familytree_core::traits::storage::{PhotoStore, UploadedPhoto};

/// Writes photos into a single directory.
///
/// Stored references have the form `{public_prefix}/{token}_{name}`, where
/// `name` is the sanitized client file name and `token` keeps two uploads
/// with the same name from overwriting each other.
#[derive(Debug, Clone)]
pub struct LocalPhotoStore {
    /// Directory all photos are written to.
    root: PathBuf,
    /// Prefix of the returned references.
    public_prefix: String,
}

impl LocalPhotoStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub async fn new(root_path: &str, public_prefix: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Upload,
                format!("Failed to create upload directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_prefix: public_prefix.trim_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PhotoStore for LocalPhotoStore {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn store(&self, photo: &UploadedPhoto) -> AppResult<String> {
        let token = Uuid::new_v4().simple().to_string();
        let stored_name = format!("{}_{}", &token[..12], sanitize_file_name(&photo.file_name));
        let full_path = self.root.join(&stored_name);

        fs::write(&full_path, &photo.data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Upload,
                format!("Failed to save photo '{}'", photo.file_name),
                e,
            )
        })?;

        debug!(path = %full_path.display(), bytes = photo.data.len(), "Stored photo");

        if self.public_prefix.is_empty() {
            Ok(stored_name)
        } else {
            Ok(format!("{}/{}", self.public_prefix, stored_name))
        }
    }
}

/// Reduce a client-supplied file name to a safe single path component.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned.to_string()
    }
}
