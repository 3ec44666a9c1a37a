//! Runtime Configuration
//!
//! Optional JSON object the host page can set before the app loads:
//!
//! ```html
//! <script>window.__TASKFLOW_CONFIG__ = { drag: { delay_ms: 150 } };</script>
//! ```

use taskflow_core::{AppConfig, DomainError, DomainResult};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__TASKFLOW_CONFIG__";

/// Read the page-provided config. Missing means defaults.
pub fn load_config() -> DomainResult<AppConfig> {
    let Some(window) = web_sys::window() else {
        return Ok(AppConfig::default());
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| DomainError::Internal(format!("{:?}", e)))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig =
        serde_wasm_bindgen::from_value(raw).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
