//! Console Configuration
//!
//! Optional `window.__TAGGING_CONSOLE_CONFIG__` object; every field has a
//! default so deployments only set what they change.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__TAGGING_CONSOLE_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prefix for every request path, empty for same-origin
    pub api_base: String,
    pub login_page: String,
    pub admin_page: String,
    pub reviewer_page: String,
    /// Accepted upload extensions, without the dot
    pub upload_extensions: Vec<String>,
    /// Dashboard auto-refresh period; 0 disables it
    pub dashboard_refresh_secs: u32,
    pub toast_ms: u32,
    /// Delay before the upload bar jumps to its middle milestone
    pub upload_milestone_delay_ms: u32,
    pub items_per_page: u32,
    pub upload_sessions_limit: usize,
    pub log_level: String,
    /// Recent log lines kept for the log panel
    pub log_buffer_lines: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_page: "/".to_string(),
            admin_page: "/admin.html".to_string(),
            reviewer_page: "/reviewer.html".to_string(),
            upload_extensions: vec!["xlsx".to_string(), "xls".to_string()],
            dashboard_refresh_secs: 15,
            toast_ms: 3000,
            upload_milestone_delay_ms: 600,
            items_per_page: 10,
            upload_sessions_limit: 10,
            log_level: "info".to_string(),
            log_buffer_lines: console_logger::DEFAULT_CAPACITY,
        }
    }
}

impl ConsoleConfig {
    /// Parse a config value; `undefined`/`null` yield the defaults
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Read the page's config object, falling back to defaults
    ///
    /// Runs before the logger exists, so a parse failure comes back as a
    /// warning for the caller to log once logging is up.
    pub fn load() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        Self::or_defaults(Self::from_js(value))
    }

    /// Keep a parsed config, or fall back to defaults with a warning line
    pub fn or_defaults(parsed: Result<Self, String>) -> (Self, Option<String>) {
        match parsed {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e)),
            ),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
