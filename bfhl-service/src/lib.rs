pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use config::BfhlConfig;
use services::TextProvider;
use std::sync::Arc;

/// Shared application state: immutable configuration plus the AI provider.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BfhlConfig>,
    pub text_provider: Arc<dyn TextProvider>,
}

impl AppState {
    pub fn new(config: BfhlConfig, text_provider: Arc<dyn TextProvider>) -> Self {
        Self {
            config: Arc::new(config),
            text_provider,
        }
    }

    pub fn official_email(&self) -> Option<String> {
        self.config.official_email.clone()
    }
}
