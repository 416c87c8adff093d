//! Shared helpers used across CLI commands.
//!
//! Centralises the mapping from loaded configuration to the dispatcher
//! every command needs, ensuring consistent defaults everywhere.

use woobridge_config::AppConfig;
use woobridge_core::{Dispatcher, StoreDefaults};

/// Maps the `store` config section onto the dispatcher's process-wide
/// credential defaults.
pub fn store_defaults(config: &AppConfig) -> StoreDefaults {
    StoreDefaults {
        site_url: config.store.site_url.clone(),
        username: config.store.username.clone(),
        password: config.store.password.clone(),
        consumer_key: config.store.consumer_key.clone(),
        consumer_secret: config.store.consumer_secret.clone(),
    }
}

/// Creates a dispatcher from the loaded configuration.
pub fn create_dispatcher(config: &AppConfig) -> Dispatcher {
    Dispatcher::new(store_defaults(config), config.upstream.timeout())
}
