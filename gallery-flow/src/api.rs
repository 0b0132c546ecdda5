use async_trait::async_trait;
use thiserror::Error;

use crate::preview::FileHandle;
use crate::types::ImageRecord;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status; `message` is the response body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Remote image service.
#[async_trait(?Send)]
pub trait GalleryApi {
    type File: FileHandle;

    async fn list_images(&self) -> Result<Vec<ImageRecord>, ApiError>;

    /// One multipart request carrying all files in order. Returns only the
    /// records created by this request.
    async fn upload_images(&self, files: &[Self::File]) -> Result<Vec<ImageRecord>, ApiError>;

    async fn delete_image(&self, id: &str) -> Result<(), ApiError>;
}
