use std::sync::Arc;

use crate::config::Config;
use crate::database::ActivityRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ActivityRegistry::seeded(config.capacity_policy))
    }
}
