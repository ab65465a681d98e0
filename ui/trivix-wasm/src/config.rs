//! Page-level configuration.
//!
//! Sources, first match wins:
//! 1. a `window.TRIVIX_CONFIG` object,
//! 2. the `<script id="trivix-config" type="application/json">` block,
//! 3. built-in defaults.
//!
//! Partial overrides keep the remaining defaults.

use gloo_console as console;
use trivix_core::TrivixConfig;
use wasm_bindgen::JsValue;

use crate::dom;

pub const CONFIG_GLOBAL: &str = "TRIVIX_CONFIG";
pub const CONFIG_ELEMENT_ID: &str = "trivix-config";

pub fn load() -> TrivixConfig {
    if let Some(config) = from_global() {
        return config;
    }
    from_script().unwrap_or_default()
}

fn from_global() -> Option<TrivixConfig> {
    let window = dom::window().ok()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let parsed = serde_wasm_bindgen::from_value::<TrivixConfig>(value)
        .map_err(|e| e.to_string())
        .and_then(|c| c.validate().map(|_| c).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => Some(config),
        Err(e) => {
            console::warn!(format!("ignoring window.{CONFIG_GLOBAL}: {e}"));
            None
        }
    }
}

fn from_script() -> Option<TrivixConfig> {
    let raw = dom::by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    match TrivixConfig::from_json(&raw) {
        Ok(config) => Some(config),
        Err(e) => {
            console::warn!(format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
            None
        }
    }
}
