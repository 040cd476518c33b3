//! Runtime Configuration
//!
//! Backend URLs and log level. Defaults come from the build environment;
//! a page can override them with a `window.__MENU_CONFIG__` object.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const WINDOW_KEY: &str = "__MENU_CONFIG__";

/// HTTP method groups that may point at different bases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub base_url: String,
    pub get_url: Option<String>,
    pub post_url: Option<String>,
    pub put_url: Option<String>,
    pub delete_url: Option<String>,
    pub log_level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("MENU_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            get_url: None,
            post_url: None,
            put_url: None,
            delete_url: None,
            log_level: "info".to_string(),
        }
    }
}

impl MenuConfig {
    /// Defaults merged with the page-provided override, if any
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_KEY)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => {
                match serde_wasm_bindgen::from_value::<MenuConfig>(value) {
                    Ok(config) => config,
                    Err(e) => {
                        // Logger is not up yet
                        web_sys::console::warn_1(
                            &format!("[CONFIG] Ignoring malformed {}: {}", WINDOW_KEY, e).into(),
                        );
                        Self::default()
                    }
                }
            }
            _ => Self::default(),
        }
    }

    /// Base URL for a method, without trailing slash
    pub fn base_for(&self, method: Method) -> &str {
        let specific = match method {
            Method::Get => &self.get_url,
            Method::Post => &self.post_url,
            Method::Put => &self.put_url,
            Method::Delete => &self.delete_url,
        };
        specific
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.base_url)
            .trim_end_matches('/')
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_override_falls_back_to_base() {
        let config = MenuConfig {
            base_url: "http://api.local/".into(),
            delete_url: Some("http://admin.local".into()),
            post_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.base_for(Method::Get), "http://api.local");
        assert_eq!(config.base_for(Method::Post), "http://api.local");
        assert_eq!(config.base_for(Method::Delete), "http://admin.local");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: MenuConfig = serde_json::from_str(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.base_url, MenuConfig::default().base_url);

        let bad = MenuConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(bad.log_level(), log::Level::Info);
    }
}
