use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeVariant {
    Small,
    Medium,
    Large,
    Original,
}

impl SizeVariant {
    pub const THUMBNAILS: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large];

    pub fn label(self) -> &'static str {
        match self {
            SizeVariant::Small => "sm",
            SizeVariant::Medium => "md",
            SizeVariant::Large => "lg",
            SizeVariant::Original => "orig",
        }
    }
}

/// The four size variants the server produces for every image. All four are
/// required when deserializing; a record missing one is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub orig: String,
}

impl ImageUrls {
    pub fn get(&self, variant: SizeVariant) -> &str {
        match variant {
            SizeVariant::Small => &self.sm,
            SizeVariant::Medium => &self.md,
            SizeVariant::Large => &self.lg,
            SizeVariant::Original => &self.orig,
        }
    }

    /// Labelled links for the thumbnail row of a card (`sm`, `md`, `lg`).
    pub fn thumbnail_links(&self) -> Vec<(&'static str, String)> {
        SizeVariant::THUMBNAILS
            .iter()
            .map(|v| (v.label(), self.get(*v).to_string()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "uuid")]
    pub id: String,
    pub original_filename: String,
    pub urls: ImageUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ImageRecord {
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width?, self.height?))
    }
}

/// Body of the list and upload endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub items: Vec<ImageRecord>,
}

#[cfg(test)]
pub(crate) fn record(id: &str, filename: &str) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        original_filename: filename.to_string(),
        urls: ImageUrls {
            sm: format!("/i/{id}/sm"),
            md: format!("/i/{id}/md"),
            lg: format!("/i/{id}/lg"),
            orig: format!("/i/{id}/orig"),
        },
        content_type: None,
        width: None,
        height: None,
        size_bytes: None,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_list_body() {
        let body = r#"{
            "items": [{
                "id": 7,
                "uuid": "ab12",
                "original_filename": "cat.png",
                "content_type": "image/png",
                "width": 640,
                "height": 480,
                "size_bytes": 2048,
                "created_at": "2024-01-01T00:00:00Z",
                "urls": {"orig": "/i/ab12/orig", "sm": "/i/ab12/sm", "md": "/i/ab12/md", "lg": "/i/ab12/lg"}
            }]
        }"#;
        let list: ImageList = serde_json::from_str(body).unwrap();
        assert_eq!(list.items.len(), 1);
        let rec = &list.items[0];
        assert_eq!(rec.id, "ab12");
        assert_eq!(rec.original_filename, "cat.png");
        assert_eq!(rec.dimensions(), Some((640, 480)));
        assert_eq!(rec.urls.get(SizeVariant::Original), "/i/ab12/orig");
    }

    #[test]
    fn missing_items_field_is_an_empty_list() {
        let list: ImageList = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn record_without_all_four_variants_is_rejected() {
        let body = r#"{"uuid": "x", "original_filename": "x.png", "urls": {"sm": "a", "md": "b", "lg": "c"}}"#;
        assert!(serde_json::from_str::<ImageRecord>(body).is_err());
    }

    #[test]
    fn thumbnail_links_are_small_medium_large() {
        let rec = record("q", "q.png");
        let labels: Vec<&str> = rec.urls.thumbnail_links().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["sm", "md", "lg"]);
    }
}
