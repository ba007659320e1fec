use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// `BACKEND_URL` and `BASENAME` as resolved at startup.
///
/// Sources, first hit wins per field: `window.__TIENDA_ENV` (env.js),
/// `./config.json`, then the variables present when the bundle was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "BACKEND_URL")]
    pub backend_url: Option<String>,
    #[serde(default, alias = "BASENAME")]
    pub basename: Option<String>,
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

impl RuntimeConfig {
    pub fn new(backend_url: Option<&str>, basename: Option<&str>) -> Self {
        Self {
            backend_url: normalize_backend_url(backend_url),
            basename: normalize_basename(basename),
        }
    }

    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url.as_deref()
    }

    pub fn api_base_url(&self) -> Option<String> {
        self.backend_url().map(|url| format!("{}/api", url))
    }

    pub fn basename(&self) -> String {
        self.basename.clone().unwrap_or_default()
    }

    fn normalized(self) -> Self {
        Self::new(self.backend_url.as_deref(), self.basename.as_deref())
    }

    fn or(self, fallback: RuntimeConfig) -> Self {
        Self {
            backend_url: self.backend_url.or(fallback.backend_url),
            basename: self.basename.or(fallback.basename),
        }
    }

    fn is_complete(&self) -> bool {
        self.backend_url.is_some() && self.basename.is_some()
    }
}

pub fn normalize_backend_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_basename(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

fn build_time() -> RuntimeConfig {
    RuntimeConfig::new(option_env!("BACKEND_URL"), option_env!("BASENAME"))
}

fn read_global(object: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&any, &(*key).into())
            .ok()
            .and_then(|value| value.as_string())
    })
}

fn snapshot_from_env_js() -> RuntimeConfig {
    // window.__TIENDA_ENV = { BACKEND_URL: "...", BASENAME: "..." }
    RuntimeConfig::new(
        read_global("__TIENDA_ENV", &["BACKEND_URL", "backend_url"]).as_deref(),
        read_global("__TIENDA_ENV", &["BASENAME", "basename"]).as_deref(),
    )
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>()
        .await
        .ok()
        .map(RuntimeConfig::normalized)
}

pub async fn load() -> RuntimeConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    let mut config = snapshot_from_env_js();
    if !config.is_complete() {
        if let Some(from_file) = fetch_runtime_config().await {
            config = config.or(from_file);
        }
    }
    let config = config.or(build_time());
    match config.backend_url() {
        Some(url) => log::info!("backend url resolved to {}", url),
        None => log::warn!("BACKEND_URL is not configured"),
    }
    let _ = CONFIG.set(config.clone());
    config
}
