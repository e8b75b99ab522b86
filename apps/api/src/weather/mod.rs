//! Forecast provider port and the weather-conditioned styling guidance.
//!
//! The generation pipeline consumes forecasts only through `ForecastProvider`,
//! carried in `AppState` as an `Arc<dyn ForecastProvider>` so tests can swap
//! in a scripted provider without touching the pipeline.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod guidance;
pub mod nws;

/// One calendar day of forecast data, aggregated over the day's periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub date: NaiveDate,
    /// Human-readable condition. Multiple distinct forecast periods for the
    /// day are joined with " / " (e.g. "Light Rain / Partly Cloudy").
    pub condition: String,
    pub min_temp: i32,
    pub max_temp: i32,
    pub is_daytime: bool,
}

/// External forecast boundary.
///
/// Returns `Ok(None)` when the provider has no data for the requested day —
/// callers drop such days and never fabricate a forecast. Errors are isolated
/// at the call site to the single day they affect.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
        timezone: Option<&str>,
    ) -> Result<Option<WeatherSummary>>;
}
