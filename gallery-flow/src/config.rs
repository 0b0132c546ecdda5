use serde::{Deserialize, Serialize};

const MAX_PAGE_SIZE: u32 = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Prefix for every endpoint, e.g. `https://img.example.com`. Empty means same origin.
    pub api_base: String,
    pub list_path: String,
    pub upload_path: String,
    pub delete_path: String,
    /// Multipart field repeated once per file.
    pub upload_field: String,
    pub page_size: u32,
    pub delete_prompt: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            list_path: "/api/images".to_string(),
            upload_path: "/api/upload".to_string(),
            delete_path: "/api/images".to_string(),
            upload_field: "files".to_string(),
            page_size: 50,
            delete_prompt: "Delete this image?".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn list_url(&self) -> String {
        format!("{}?limit={}&offset=0", self.endpoint(&self.list_path), self.page_size())
    }

    pub fn upload_url(&self) -> String {
        self.endpoint(&self.upload_path)
    }

    pub fn delete_url(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint(&self.delete_path), id)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_routes() {
        let config = GalleryConfig::default();
        assert_eq!(config.list_url(), "/api/images?limit=50&offset=0");
        assert_eq!(config.upload_url(), "/api/upload");
        assert_eq!(config.delete_url("ab12"), "/api/images/ab12");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"api_base": "https://img.example.com/", "page_size": 1000}"#).unwrap();
        assert_eq!(config.upload_field, "files");
        assert_eq!(config.page_size(), 200);
        assert_eq!(config.upload_url(), "https://img.example.com/api/upload");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let config = GalleryConfig { page_size: 0, ..Default::default() };
        assert_eq!(config.list_url(), "/api/images?limit=1&offset=0");
    }
}
