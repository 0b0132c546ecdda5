//! Upload and gallery state controller.
//!
//! Everything here is independent of the browser: file handles, the remote
//! service and the presentation layer are reached through traits so the
//! sequencing can be exercised natively.

pub mod api;
pub mod config;
pub mod controller;
pub mod presenter;
pub mod preview;
pub mod source;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{ApiError, GalleryApi};
pub use config::GalleryConfig;
pub use controller::{Command, CommandOutcome, DeletionOutcome, GalleryController, UploadOutcome};
pub use presenter::{Presenter, Severity};
pub use preview::{format_file_size, mime_subtype_label, FileHandle, FilePreview, PreviewError, PreviewReader};
pub use source::{DropItem, FileSource, PendingFileBatch};
pub use store::{GalleryStore, RenderPatch};
pub use types::{ImageList, ImageRecord, ImageUrls, SizeVariant};
