use gallery_flow::GalleryConfig;
use wasm_bindgen::JsValue;

/// Optional page-provided overrides, e.g. `window.__GALLERY_CONFIG__ = { api_base: "..." }`.
const CONFIG_GLOBAL: &str = "__GALLERY_CONFIG__";

pub fn load_config() -> GalleryConfig {
    let Some(window) = web_sys::window() else {
        return GalleryConfig::default();
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return GalleryConfig::default();
    }
    match serde_wasm_bindgen::from_value::<GalleryConfig>(value) {
        Ok(config) => {
            web_sys::console::log_1(&format!("Loaded gallery config: {:?}", config).into());
            config
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Ignoring malformed {}: {:?}", CONFIG_GLOBAL, e).into());
            GalleryConfig::default()
        }
    }
}
