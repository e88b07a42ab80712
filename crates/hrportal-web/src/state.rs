//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hrportal_auth::token::{TokenDecoder, TokenEncoder};
use hrportal_backend::client::BackendClient;
use hrportal_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Client for the external backend API.
    pub backend: Arc<BackendClient>,
    /// Session token signer.
    pub token_encoder: Arc<TokenEncoder>,
    /// Session token validator.
    pub token_decoder: Arc<TokenDecoder>,
}

impl AppState {
    /// Wires the state from configuration.
    pub fn from_config(config: AppConfig) -> hrportal_core::AppResult<Self> {
        let backend = Arc::new(BackendClient::new(&config.backend)?);
        let token_encoder = Arc::new(TokenEncoder::new(&config.session));
        let token_decoder = Arc::new(TokenDecoder::new(&config.session));

        Ok(Self {
            config: Arc::new(config),
            backend,
            token_encoder,
            token_decoder,
        })
    }
}
