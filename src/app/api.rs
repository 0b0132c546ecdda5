use async_trait::async_trait;
use gallery_flow::{ApiError, GalleryApi, GalleryConfig, ImageList, ImageRecord};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::app::types::BrowserFile;

/// The image service over `fetch`.
pub struct HttpGalleryApi {
    config: GalleryConfig,
}

impl HttpGalleryApi {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

async fn rejected(resp: Response) -> ApiError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(text) => text,
        Err(_) => resp.status_text(),
    };
    ApiError::Rejected { status, message }
}

async fn read_image_list(resp: Response) -> Result<Vec<ImageRecord>, ApiError> {
    if !resp.ok() {
        return Err(rejected(resp).await);
    }
    let body = resp.text().await.map_err(network)?;
    serde_json::from_str::<ImageList>(&body)
        .map(|list| list.items)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl GalleryApi for HttpGalleryApi {
    type File = BrowserFile;

    async fn list_images(&self) -> Result<Vec<ImageRecord>, ApiError> {
        let resp = Request::get(&self.config.list_url()).send().await.map_err(network)?;
        read_image_list(resp).await
    }

    async fn upload_images(&self, files: &[BrowserFile]) -> Result<Vec<ImageRecord>, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        for file in files {
            form.append_with_blob_and_filename(&self.config.upload_field, &file.0, &file.0.name())
                .map_err(js_error)?;
        }
        web_sys::console::log_1(&format!("Uploading {} files to {}", files.len(), self.config.upload_url()).into());
        let resp = Request::post(&self.config.upload_url())
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_image_list(resp).await
    }

    async fn delete_image(&self, id: &str) -> Result<(), ApiError> {
        let encoded: String = js_sys::encode_uri_component(id).into();
        let resp = Request::delete(&self.config.delete_url(&encoded))
            .send()
            .await
            .map_err(network)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(rejected(resp).await)
        }
    }
}
