use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[macro_use]
mod macros;
mod command_executors;
mod components;
mod constants;
mod dom_utils;
mod messages;  // Message / Command enums
mod models;
mod network;
mod state;
mod update;    // Pure reducer

pub use network::init_api_config_js;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    if let Err(e) = network::init_api_config() {
        debug_log!("API config not set at compile time ({}). Using same origin.", e);
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Mount now if the page is parsed, otherwise wait for DOMContentLoaded.
    if document.ready_state() != "loading" {
        return mount_widget(&document);
    }

    let doc_clone = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = mount_widget(&doc_clone) {
            web_sys::console::error_1(&format!("Failed to mount chat widget: {:?}", e).into());
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;

    Ok(())
}

fn mount_widget(document: &Document) -> Result<(), JsValue> {
    components::chat_window::mount(document)
}

/// Everything rendered so far as an array of `{ id, sender, text }`.
#[wasm_bindgen]
pub fn transcript_js() -> Result<JsValue, JsValue> {
    state::APP_STATE.with(|state| {
        serde_wasm_bindgen::to_value(&state.borrow().transcript)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize transcript: {}", e)))
    })
}
