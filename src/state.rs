use anyhow::Context;

use crate::config::Config;
use crate::gate::AllowList;
use crate::store::Store;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub allow_list: Arc<AllowList>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build fresh state with an empty store and the standard allow-list
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            store: Store::new(),
            allow_list: Arc::new(
                AllowList::standard().context("Failed to compile path allow-list")?,
            ),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(Config {
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    })
    .expect("standard allow-list compiles")
}
