//! Configuration loader (file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::AppConfig;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if exists)
/// 3. Environment variables (`WOOBRIDGE_` prefix, `__` separates sections)
/// 4. Store credentials from `WORDPRESS_*` / `WOOCOMMERCE_*` variables
///
/// The flat credential variables map into the `store` section, so
/// `WORDPRESS_SITE_URL` becomes `store.site_url` and
/// `WOOCOMMERCE_CONSUMER_KEY` becomes `store.consumer_key`.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment
        .merge(Env::prefixed("WOOBRIDGE_").split("__"))
        .merge(
            Env::prefixed("WORDPRESS_")
                .map(|key| format!("store.{}", key.as_str().to_lowercase()).into())
                .split("."),
        )
        .merge(
            Env::prefixed("WOOCOMMERCE_")
                .map(|key| format!("store.{}", key.as_str().to_lowercase()).into())
                .split("."),
        );

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
