/// Name of both the JS global and the build-time env var holding the backend origin
pub const API_BASE_URL_KEY: &str = "COINME_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Backend location, built once at start-up and handed to the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_string() }
    }

    /// `window.COINME_API_BASE_URL`, then the build-time `COINME_API_BASE_URL`,
    /// then the local development server.
    pub fn from_environment() -> Self {
        let runtime = read_global(API_BASE_URL_KEY);
        let build_time = option_env!("COINME_API_BASE_URL").map(str::to_string);
        Self::new(
            runtime
                .or(build_time)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}{path}?k=v&...` with percent-encoded values
    pub fn url_for(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|v| !v.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_key: &str) -> Option<String> {
    None
}
