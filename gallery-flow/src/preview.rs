use async_trait::async_trait;
use thiserror::Error;

/// What the controller needs to know about a user-supplied file.
pub trait FileHandle {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreviewError {
    #[error("could not read {name}: {reason}")]
    Unreadable { name: String, reason: String },
    #[error("{0} is not an image")]
    NotAnImage(String),
}

/// Reads a whole file into a `data:` URL.
#[async_trait(?Send)]
pub trait PreviewReader<F> {
    async fn read_data_url(&self, file: &F) -> Result<String, PreviewError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilePreview {
    pub name: String,
    pub data_url: String,
    pub size_label: String,
    pub type_label: String,
}

impl FilePreview {
    pub fn summary(&self) -> String {
        format!("{} • {}", self.size_label, self.type_label)
    }
}

pub fn is_image(file: &impl FileHandle) -> bool {
    file.mime_type().starts_with("image/")
}

pub async fn generate_preview<F, R>(reader: &R, file: &F) -> Result<FilePreview, PreviewError>
where
    F: FileHandle,
    R: PreviewReader<F> + ?Sized,
{
    let data_url = reader.read_data_url(file).await?;
    Ok(FilePreview {
        name: file.name(),
        data_url,
        size_label: format_file_size(file.size()),
        type_label: mime_subtype_label(&file.mime_type()),
    })
}

/// 1024-based sizes, at most two decimals with trailing zeros dropped.
/// Ties round up (1.125 KB shows as 1.13 KB).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    while unit < UNITS.len() - 1 && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }
    let value = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let fixed = format!("{:.2}", (value * 100.0).round() / 100.0);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

pub fn mime_subtype_label(mime: &str) -> String {
    match mime.split_once('/') {
        Some((_, subtype)) if !subtype.is_empty() => subtype.to_uppercase(),
        _ => "UNKNOWN".to_string(),
    }
}
