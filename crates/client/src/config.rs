use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in so the wasm build needs no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "PROJECTHUB_API_URL";

/// Parse config text. Unparseable input falls back to the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Load the config once. Later calls return the same value.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_config(EMBEDDED_CONFIG);
        if let Some(url) = api_url_override() {
            config.api.base_url = url;
        }
        tracing::info!(base_url = config.base_url(), page_size = config.page_size(), "config loaded");
        config
    })
}

fn api_url_override() -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return Some(url);
            }
        }
    }
    option_env!("PROJECTHUB_API_URL")
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
}
