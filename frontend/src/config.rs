use wasm_bindgen::JsValue;

const BASE_URL_GLOBAL: &str = "ALETHEIA_API_BASE";
const ANALYZE_PATH: &str = "/api/analyze";

/// Where verification requests go. Resolved once at startup and handed to
/// the controller, so tests can point it at a fake endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Reads the `ALETHEIA_API_BASE` window global, falling back to the
    /// compile-time env var of the same name, then to same-origin requests.
    pub fn from_window() -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(BASE_URL_GLOBAL)) {
                if let Some(base) = value.as_string() {
                    return Self::new(base);
                }
            }
        }
        Self::new(option_env!("ALETHEIA_API_BASE").unwrap_or(""))
    }

    pub fn analyze_endpoint(&self) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), ANALYZE_PATH)
    }
}
