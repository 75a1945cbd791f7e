use std::sync::Arc;

use reqwest::Client;

use crate::configs::config::Config;

/// Shared across every request: one pooled HTTP client per process, reused
/// for both the document store and the Wikipedia API.
#[derive(Debug)]
pub struct AppState {
    pub http: Client,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Arc<AppState> {
        Arc::new(AppState {
            http: Client::new(),
            config,
        })
    }
}
