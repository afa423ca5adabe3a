//! localStorage wrapper for the one credential this app keeps: the
//! chat API key. The key never leaves the machine except as the bearer
//! header on the completion request.

use wasm_bindgen::JsValue;

/// Fixed localStorage key name. Must match the settings panel.
pub const API_KEY_STORAGE_KEY: &str = "flarewatch_api_key";

fn local_storage() -> Result<web_sys::Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// The stored key, or `None` when the user hasn't saved one.
pub fn load_api_key() -> Result<Option<String>, JsValue> {
    let key = local_storage()?.get_item(API_KEY_STORAGE_KEY)?;
    Ok(key.filter(|k| !k.trim().is_empty()))
}

pub fn save_api_key(key: &str) -> Result<(), JsValue> {
    local_storage()?.set_item(API_KEY_STORAGE_KEY, key)
}

pub fn clear_api_key() -> Result<(), JsValue> {
    local_storage()?.remove_item(API_KEY_STORAGE_KEY)
}
