use crate::preview::FilePreview;
use crate::store::RenderPatch;
use crate::types::ImageRecord;

pub const SCRIPT_ERROR_MESSAGE: &str = "Something went wrong. Try reloading the page.";
pub const UNHANDLED_REJECTION_MESSAGE: &str = "Something went wrong while loading data.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Warning => "notification-warning",
            Severity::Info => "notification-info",
        }
    }
}

/// The UI surface the controller drives.
pub trait Presenter {
    /// Called after every store mutation with the patch and the new snapshot.
    fn render(&self, patch: &RenderPatch, records: &[ImageRecord]);
    fn show_status(&self, text: &str);
    fn notify(&self, text: &str, severity: Severity);
    /// Blocking yes/no question.
    fn confirm(&self, prompt: &str) -> bool;
    fn show_preview(&self, preview: &FilePreview);
    fn clear_preview(&self);
}
