pub mod api_client;
pub mod config;

pub use config::ApiConfig;

use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn store_config(config: ApiConfig) {
    let mut guard = API_CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(config);
}

/// Initialize the API configuration from the compile-time `API_BASE_URL`.
/// Without it requests stay same-origin.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    store_config(config);
    Ok(())
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows runtime configuration of the endpoint origin.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    store_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Resolve the endpoint URL, falling back to same-origin `/chat`.
pub(crate) fn chat_endpoint_url() -> String {
    let guard = API_CONFIG.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard
        .as_ref()
        .map(ApiConfig::chat_url)
        .unwrap_or_else(|| ApiConfig::default().chat_url())
}
