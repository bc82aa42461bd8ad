use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            store: config.store,
            config,
        }
    }
}
