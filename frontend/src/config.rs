use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::api::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "SUPABASE_URL")]
    pub supabase_url: Option<String>,
    #[serde(default, alias = "SUPABASE_ANON_KEY")]
    pub supabase_anon_key: Option<String>,
}

/// Validated connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl RuntimeConfig {
    pub fn backend(&self) -> Result<BackendConfig, ApiError> {
        let url = non_blank(self.supabase_url.as_ref()).ok_or_else(ApiError::config_missing)?;
        let key =
            non_blank(self.supabase_anon_key.as_ref()).ok_or_else(ApiError::config_missing)?;
        Ok(BackendConfig::new(url, key))
    }

    fn merge_missing(mut self, other: RuntimeConfig) -> Self {
        if non_blank(self.supabase_url.as_ref()).is_none() {
            self.supabase_url = other.supabase_url;
        }
        if non_blank(self.supabase_anon_key.as_ref()).is_none() {
            self.supabase_anon_key = other.supabase_anon_key;
        }
        self
    }

    fn is_complete(&self) -> bool {
        self.backend().is_ok()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<RuntimeConfig> {
    // Optional global written by env.js: window.__TECHNOLEASE_ENV = { SUPABASE_URL: "...", ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__TECHNOLEASE_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        supabase_url: read_global_key(&obj, &["SUPABASE_URL", "supabase_url"]),
        supabase_anon_key: read_global_key(&obj, &["SUPABASE_ANON_KEY", "supabase_anon_key"]),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn log_resolved(cfg: &RuntimeConfig) {
    let key_len = cfg
        .supabase_anon_key
        .as_deref()
        .map(str::len)
        .unwrap_or_default();
    log::info!(
        "backend config: url={:?} has_key={} key_len={}",
        cfg.supabase_url,
        key_len > 0,
        key_len
    );
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let mut resolved = get_from_env_js().unwrap_or_default();
    if !resolved.is_complete() {
        if let Some(fetched) = fetch_runtime_config().await {
            resolved = resolved.merge_missing(fetched);
        }
    }
    log_resolved(&resolved);
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_backend_config() -> Result<BackendConfig, ApiError> {
    await_runtime_config().await.backend()
}

pub async fn init() {
    let _ = await_runtime_config().await;
}
