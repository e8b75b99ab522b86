use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::weather::ForecastProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both external boundaries are trait objects constructed once at startup and
/// passed in explicitly — nothing reaches for a provider ambiently.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text-completion port. Production: `OpenAiClient`.
    pub llm: Arc<dyn CompletionClient>,
    /// Forecast port. Production: `NwsClient`.
    pub forecast: Arc<dyn ForecastProvider>,
    pub config: Config,
}
