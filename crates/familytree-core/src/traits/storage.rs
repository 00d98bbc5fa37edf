//! Photo store trait for persisting uploaded member photos.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A photo received with a create or edit submission.
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    /// File name as sent by the client.
    pub file_name: String,
    /// Raw file contents.
    pub data: Bytes,
}

impl UploadedPhoto {
    /// Browsers submit an empty file part when no file was chosen.
    pub fn is_empty(&self) -> bool {
        self.file_name.trim().is_empty() && self.data.is_empty()
    }
}

/// Backend that persists uploaded photos and hands back a reference.
///
/// The returned reference is stored verbatim in the member's `image_file`
/// column, so it must stay stable for the life of the stored file.
#[async_trait]
pub trait PhotoStore: Send + Sync + std::fmt::Debug + 'static {
    /// Check whether the store is writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Persist a photo and return the reference to record on the member.
    async fn store(&self, photo: &UploadedPhoto) -> AppResult<String>;
}
