//! Recording mocks for the controller's collaborators.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::{ApiError, GalleryApi};
use crate::presenter::{Presenter, Severity};
use crate::preview::{FileHandle, FilePreview, PreviewError, PreviewReader};
use crate::store::RenderPatch;
use crate::types::ImageRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct MockFile {
    name: String,
    size: u64,
    mime: String,
    readable: bool,
}

impl MockFile {
    pub fn new(name: &str, size: u64, mime: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
            readable: true,
        }
    }

    pub fn unreadable(mut self) -> Self {
        self.readable = false;
        self
    }
}

impl FileHandle for MockFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

pub struct MockPreviewReader;

#[async_trait(?Send)]
impl PreviewReader<MockFile> for MockPreviewReader {
    async fn read_data_url(&self, file: &MockFile) -> Result<String, PreviewError> {
        if file.readable {
            Ok(format!("data:{};base64,AAAA", file.mime))
        } else {
            Err(PreviewError::Unreadable {
                name: file.name.clone(),
                reason: "permission denied".to_string(),
            })
        }
    }
}

/// Grouped so each call takes one borrow.
#[derive(Default)]
struct MockApiState {
    listing: Option<Result<Vec<ImageRecord>, ApiError>>,
    upload_results: VecDeque<Result<Vec<ImageRecord>, ApiError>>,
    upload_gates: VecDeque<oneshot::Receiver<()>>,
    delete_failures: HashMap<String, ApiError>,
    delete_gates: VecDeque<oneshot::Receiver<()>>,
    upload_calls: Vec<Vec<String>>,
    delete_calls: Vec<String>,
}

/// Mock image service.
///
/// Upload results are handed out in call order. Gates hold a request open
/// until the matching sender fires, so tests can finish requests in any order.
#[derive(Default)]
pub struct MockGalleryApi {
    state: RefCell<MockApiState>,
}

impl MockGalleryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(self, listing: Result<Vec<ImageRecord>, ApiError>) -> Self {
        self.state.borrow_mut().listing = Some(listing);
        self
    }

    pub fn with_upload(self, result: Result<Vec<ImageRecord>, ApiError>) -> Self {
        self.state.borrow_mut().upload_results.push_back(result);
        self
    }

    pub fn with_upload_gate(self, gate: oneshot::Receiver<()>) -> Self {
        self.state.borrow_mut().upload_gates.push_back(gate);
        self
    }

    pub fn with_delete_failure(self, id: &str, err: ApiError) -> Self {
        self.state.borrow_mut().delete_failures.insert(id.to_string(), err);
        self
    }

    pub fn with_delete_gate(self, gate: oneshot::Receiver<()>) -> Self {
        self.state.borrow_mut().delete_gates.push_back(gate);
        self
    }

    pub fn upload_calls(&self) -> Vec<Vec<String>> {
        self.state.borrow().upload_calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.state.borrow().delete_calls.clone()
    }
}

#[async_trait(?Send)]
impl GalleryApi for MockGalleryApi {
    type File = MockFile;

    async fn list_images(&self) -> Result<Vec<ImageRecord>, ApiError> {
        self.state.borrow().listing.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn upload_images(&self, files: &[MockFile]) -> Result<Vec<ImageRecord>, ApiError> {
        let (result, gate) = {
            let mut state = self.state.borrow_mut();
            state.upload_calls.push(files.iter().map(|f| f.name()).collect());
            let result = state.upload_results.pop_front().unwrap_or_else(|| Ok(Vec::new()));
            (result, state.upload_gates.pop_front())
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }

    async fn delete_image(&self, id: &str) -> Result<(), ApiError> {
        let (result, gate) = {
            let mut state = self.state.borrow_mut();
            state.delete_calls.push(id.to_string());
            let result = match state.delete_failures.get(id) {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            };
            (result, state.delete_gates.pop_front())
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }
}

pub struct RecordingPresenter {
    renders: RefCell<Vec<(RenderPatch, Vec<ImageRecord>)>>,
    statuses: RefCell<Vec<String>>,
    notifications: RefCell<Vec<(String, Severity)>>,
    previews: RefCell<Vec<FilePreview>>,
    confirm_answer: Cell<bool>,
    confirm_calls: Cell<usize>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self {
            renders: RefCell::new(Vec::new()),
            statuses: RefCell::new(Vec::new()),
            notifications: RefCell::new(Vec::new()),
            previews: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
            confirm_calls: Cell::new(0),
        }
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn renders(&self) -> Vec<(RenderPatch, Vec<ImageRecord>)> {
        self.renders.borrow().clone()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.notifications.borrow().clone()
    }

    pub fn previews(&self) -> Vec<FilePreview> {
        self.previews.borrow().clone()
    }

    pub fn confirm_calls(&self) -> usize {
        self.confirm_calls.get()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, patch: &RenderPatch, records: &[ImageRecord]) {
        self.renders.borrow_mut().push((patch.clone(), records.to_vec()));
    }

    fn show_status(&self, text: &str) {
        self.statuses.borrow_mut().push(text.to_string());
    }

    fn notify(&self, text: &str, severity: Severity) {
        self.notifications.borrow_mut().push((text.to_string(), severity));
    }

    fn confirm(&self, _prompt: &str) -> bool {
        self.confirm_calls.set(self.confirm_calls.get() + 1);
        self.confirm_answer.get()
    }

    fn show_preview(&self, preview: &FilePreview) {
        self.previews.borrow_mut().push(preview.clone());
    }

    fn clear_preview(&self) {
        self.previews.borrow_mut().clear();
    }
}
