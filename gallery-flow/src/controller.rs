use std::cell::RefCell;
use std::collections::HashSet;

use crate::api::{ApiError, GalleryApi};
use crate::config::GalleryConfig;
use crate::presenter::{Presenter, Severity, SCRIPT_ERROR_MESSAGE, UNHANDLED_REJECTION_MESSAGE};
use crate::preview::{generate_preview, is_image, FileHandle, FilePreview, PreviewError, PreviewReader};
use crate::source::{FileSource, PendingFileBatch};
use crate::store::{GalleryStore, RenderPatch};
use crate::types::ImageRecord;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error: the request could not be completed";
pub const NOT_AN_IMAGE_MESSAGE: &str = "Please choose an image";
const UPLOAD_DONE_STATUS: &str = "Done";
const DELETED_MESSAGE: &str = "Image deleted";

#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    Success(Vec<ImageRecord>),
    Failure(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeletionOutcome {
    Success(String),
    Failure(String),
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// A delete for the same id has not come back yet; nothing was sent.
    AlreadyInFlight,
}

/// A user gesture, already stripped of any UI toolkit types.
#[derive(Debug)]
pub enum Command<F> {
    Load,
    Upload(FileSource<F>),
    Delete(String),
    Preview(F),
}

#[derive(Debug)]
pub enum CommandOutcome {
    Loaded(usize),
    /// `None` when there was nothing to upload.
    Upload(Option<UploadOutcome>),
    Delete(DeletionOutcome),
    Preview(Result<FilePreview, PreviewError>),
}

/// Per-page-session controller. Owns the gallery store, the status line and
/// the set of deletes awaiting a response.
///
/// Every method takes `&self`: requests may overlap, and each one only
/// borrows the store for the synchronous mutation after its response arrives.
pub struct GalleryController<A, R, P>
where
    A: GalleryApi,
{
    api: A,
    reader: R,
    presenter: P,
    config: GalleryConfig,
    store: RefCell<GalleryStore>,
    status: RefCell<String>,
    deletes_in_flight: RefCell<HashSet<String>>,
}

impl<A, R, P> GalleryController<A, R, P>
where
    A: GalleryApi,
    R: PreviewReader<A::File>,
    P: Presenter,
{
    pub fn new(api: A, reader: R, presenter: P, config: GalleryConfig) -> Self {
        Self {
            api,
            reader,
            presenter,
            config,
            store: RefCell::new(GalleryStore::new()),
            status: RefCell::new(String::new()),
            deletes_in_flight: RefCell::new(HashSet::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn records(&self) -> Vec<ImageRecord> {
        self.store.borrow().records().to_vec()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    pub async fn dispatch(&self, command: Command<A::File>) -> CommandOutcome {
        match command {
            Command::Load => CommandOutcome::Loaded(self.load().await),
            Command::Upload(source) => CommandOutcome::Upload(self.upload(source.resolve()).await),
            Command::Delete(id) => CommandOutcome::Delete(self.delete(&id).await),
            Command::Preview(file) => CommandOutcome::Preview(self.preview(&file).await),
        }
    }

    /// Initial fetch. A failed listing shows an empty gallery.
    pub async fn load(&self) -> usize {
        let records = match self.api.list_images().await {
            Ok(records) => records,
            Err(err) => {
                log::warn!("listing images failed, showing an empty gallery: {err}");
                Vec::new()
            }
        };
        let count = records.len();
        self.commit(|store| Some(store.replace_all(records)));
        log::info!("gallery loaded with {count} images");
        count
    }

    pub async fn upload(&self, batch: PendingFileBatch<A::File>) -> Option<UploadOutcome> {
        if batch.is_empty() {
            log::debug!("upload requested with no files");
            return None;
        }
        self.set_status(&format!("Uploading {} file(s)...", batch.len()));

        let outcome = match self.api.upload_images(batch.files()).await {
            Ok(records) => UploadOutcome::Success(records),
            Err(ApiError::Network(reason)) => {
                log::warn!("upload of {} file(s) did not complete: {reason}", batch.len());
                UploadOutcome::Failure(NETWORK_ERROR_MESSAGE.to_string())
            }
            Err(err) => {
                log::warn!("upload of {} file(s) failed: {err}", batch.len());
                UploadOutcome::Failure(err.to_string())
            }
        };

        match &outcome {
            UploadOutcome::Success(records) => {
                log::info!("uploaded {} image(s)", records.len());
                self.set_status(UPLOAD_DONE_STATUS);
                self.commit(|store| store.prepend_many(records.clone()));
            }
            UploadOutcome::Failure(message) => self.set_status(&format!("Error: {message}")),
        }
        Some(outcome)
    }

    /// Confirm, then delete remotely; the record only leaves the store once
    /// the server has accepted the delete.
    pub async fn delete(&self, id: &str) -> DeletionOutcome {
        if self.deletes_in_flight.borrow().contains(id) {
            log::debug!("delete of {id} already in flight");
            return DeletionOutcome::AlreadyInFlight;
        }
        if !self.presenter.confirm(&self.config.delete_prompt) {
            return DeletionOutcome::Cancelled;
        }

        self.deletes_in_flight.borrow_mut().insert(id.to_string());
        let result = self.api.delete_image(id).await;
        self.deletes_in_flight.borrow_mut().remove(id);

        match result {
            Ok(()) => {
                if !self.commit(|store| store.remove_by_id(id)) {
                    log::debug!("deleted {id} was no longer in the gallery");
                }
                log::info!("deleted image {id}");
                self.presenter.notify(DELETED_MESSAGE, Severity::Success);
                DeletionOutcome::Success(id.to_string())
            }
            Err(err) => {
                log::warn!("delete of {id} failed: {err}");
                let message = match err {
                    ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
                    other => format!("Could not delete image: {other}"),
                };
                self.presenter.notify(&message, Severity::Error);
                DeletionOutcome::Failure(message)
            }
        }
    }

    /// Selection preview for a single file; on failure the current preview
    /// stays as it was.
    pub async fn preview(&self, file: &A::File) -> Result<FilePreview, PreviewError> {
        if !is_image(file) {
            self.presenter.notify(NOT_AN_IMAGE_MESSAGE, Severity::Warning);
            return Err(PreviewError::NotAnImage(file.name()));
        }
        match generate_preview(&self.reader, file).await {
            Ok(preview) => {
                self.presenter.show_preview(&preview);
                Ok(preview)
            }
            Err(err) => {
                log::warn!("preview failed: {err}");
                self.presenter.notify(&err.to_string(), Severity::Error);
                Err(err)
            }
        }
    }

    pub fn clear_preview(&self) {
        self.presenter.clear_preview();
    }

    /// Last-resort handler for failures nothing else caught.
    pub fn report_unhandled_rejection(&self, reason: &str) {
        log::error!("unhandled rejection: {reason}");
        self.presenter.notify(UNHANDLED_REJECTION_MESSAGE, Severity::Error);
    }

    pub fn report_script_error(&self, message: &str) {
        log::error!("script error: {message}");
        self.presenter.notify(SCRIPT_ERROR_MESSAGE, Severity::Error);
    }

    fn set_status(&self, text: &str) {
        *self.status.borrow_mut() = text.to_string();
        self.presenter.show_status(text);
    }

    fn commit(&self, mutate: impl FnOnce(&mut GalleryStore) -> Option<RenderPatch>) -> bool {
        let (patch, snapshot) = {
            let mut store = self.store.borrow_mut();
            match mutate(&mut store) {
                Some(patch) => (patch, store.records().to_vec()),
                None => return false,
            }
        };
        self.presenter.render(&patch, &snapshot);
        true
    }
}
