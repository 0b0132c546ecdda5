use async_trait::async_trait;
use gallery_flow::{DropItem, FileSource, PreviewError, PreviewReader};
use gloo_file::futures::read_as_data_url;
use web_sys::{DataTransferItem, DragEvent, FileList, HtmlInputElement};

use crate::app::types::BrowserFile;

fn collect_file_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length()).filter_map(|i| list.get(i)).map(BrowserFile).collect()
}

pub fn picked_files(input: &HtmlInputElement) -> Vec<BrowserFile> {
    input.files().map(|list| collect_file_list(&list)).unwrap_or_default()
}

fn classify_item(item: DataTransferItem) -> DropItem<BrowserFile> {
    if item.kind() != "file" {
        return DropItem::NonFile;
    }
    match item.get_as_file() {
        Ok(Some(file)) => DropItem::File(BrowserFile(file)),
        _ => DropItem::NonFile,
    }
}

/// Must run inside the drop handler; the data transfer is emptied afterwards.
pub fn dropped_source(ev: &DragEvent) -> FileSource<BrowserFile> {
    let Some(transfer) = ev.data_transfer() else {
        web_sys::console::log_1(&"Drop without data transfer".into());
        return FileSource::DroppedFiles(Vec::new());
    };
    let files = transfer.files().map(|list| collect_file_list(&list)).unwrap_or_default();
    let list = transfer.items();
    let items = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(classify_item)
        .collect();
    FileSource::from_drop(files, items)
}

pub struct BrowserPreviewReader;

#[async_trait(?Send)]
impl PreviewReader<BrowserFile> for BrowserPreviewReader {
    async fn read_data_url(&self, file: &BrowserFile) -> Result<String, PreviewError> {
        let blob = gloo_file::Blob::from(web_sys::Blob::from(file.0.clone()));
        read_as_data_url(&blob).await.map_err(|e| PreviewError::Unreadable {
            name: file.0.name(),
            reason: e.to_string(),
        })
    }
}
