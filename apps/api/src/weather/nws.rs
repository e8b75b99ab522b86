//! National Weather Service (api.weather.gov) forecast provider.
//!
//! Two-step lookup: a points request resolves the grid forecast URL for a
//! coordinate, then the forecast request returns half-day periods. Periods
//! falling on the requested local day are aggregated into one
//! `WeatherSummary`. The NWS API rejects requests without a User-Agent.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::weather::{ForecastProvider, WeatherSummary};

const NWS_API_URL: &str = "https://api.weather.gov";
/// Used when the user profile carries no timezone.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Error)]
pub enum NwsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NWS API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
struct ForecastPeriod {
    #[serde(rename = "startTime")]
    start_time: DateTime<FixedOffset>,
    temperature: i32,
    #[serde(rename = "shortForecast")]
    short_forecast: String,
    #[serde(rename = "isDaytime")]
    is_daytime: bool,
}

/// Forecast provider backed by the public NWS API.
#[derive(Clone)]
pub struct NwsClient {
    client: Client,
    user_agent: String,
}

impl NwsClient {
    pub fn new(user_agent: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            user_agent,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, NwsError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NwsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ForecastProvider for NwsClient {
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
        timezone: Option<&str>,
    ) -> Result<Option<WeatherSummary>> {
        let points_url = format!("{NWS_API_URL}/points/{latitude},{longitude}");
        let points: PointsResponse = self.get_json(&points_url).await?;

        let forecast: ForecastResponse = self.get_json(&points.properties.forecast).await?;

        let tz = resolve_timezone(timezone);
        let periods: Vec<&ForecastPeriod> = forecast
            .properties
            .periods
            .iter()
            .filter(|p| p.start_time.with_timezone(&tz).date_naive() == date)
            .collect();

        if periods.is_empty() {
            debug!(%date, "no forecast periods for requested day");
            return Ok(None);
        }

        Ok(Some(summarize_day(date, &periods)))
    }
}

/// Parses an IANA timezone name, falling back to the default rather than
/// failing the whole lookup on a bad profile value.
fn resolve_timezone(timezone: Option<&str>) -> Tz {
    let name = timezone.unwrap_or(DEFAULT_TIMEZONE);
    name.parse().unwrap_or_else(|_| {
        warn!(timezone = name, "unknown timezone, using {DEFAULT_TIMEZONE}");
        DEFAULT_TIMEZONE.parse().expect("default timezone is valid")
    })
}

/// Collapses a day's periods into one summary: temperature extremes, any
/// daytime period, and the distinct conditions joined in period order.
fn summarize_day(date: NaiveDate, periods: &[&ForecastPeriod]) -> WeatherSummary {
    let min_temp = periods.iter().map(|p| p.temperature).min().unwrap_or(0);
    let max_temp = periods.iter().map(|p| p.temperature).max().unwrap_or(0);

    let mut conditions: Vec<&str> = Vec::new();
    for period in periods {
        if !conditions.contains(&period.short_forecast.as_str()) {
            conditions.push(&period.short_forecast);
        }
    }

    WeatherSummary {
        date,
        condition: conditions.join(" / "),
        min_temp,
        max_temp,
        is_daytime: periods.iter().any(|p| p.is_daytime),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, temp: i32, forecast: &str, daytime: bool) -> ForecastPeriod {
        ForecastPeriod {
            start_time: start.parse().unwrap(),
            temperature: temp,
            short_forecast: forecast.to_string(),
            is_daytime: daytime,
        }
    }

    #[test]
    fn test_summarize_day_aggregates_extremes_and_conditions() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let day = period("2025-03-14T06:00:00-04:00", 58, "Light Rain", true);
        let night = period("2025-03-14T18:00:00-04:00", 41, "Partly Cloudy", false);

        let summary = summarize_day(date, &[&day, &night]);
        assert_eq!(summary.min_temp, 41);
        assert_eq!(summary.max_temp, 58);
        assert_eq!(summary.condition, "Light Rain / Partly Cloudy");
        assert!(summary.is_daytime);
    }

    #[test]
    fn test_summarize_day_dedupes_repeated_conditions() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let a = period("2025-03-14T06:00:00-04:00", 50, "Sunny", true);
        let b = period("2025-03-14T18:00:00-04:00", 44, "Sunny", false);

        let summary = summarize_day(date, &[&a, &b]);
        assert_eq!(summary.condition, "Sunny");
    }

    #[test]
    fn test_period_wire_format_deserializes() {
        let json = r#"{
            "startTime": "2025-03-14T06:00:00-04:00",
            "temperature": 52,
            "shortForecast": "Mostly Sunny",
            "isDaytime": true
        }"#;
        let p: ForecastPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(p.temperature, 52);
        assert_eq!(p.short_forecast, "Mostly Sunny");
        assert!(p.is_daytime);
    }

    #[test]
    fn test_resolve_timezone_falls_back_on_garbage() {
        let tz = resolve_timezone(Some("Not/AZone"));
        assert_eq!(tz.name(), DEFAULT_TIMEZONE);
    }

    #[test]
    fn test_resolve_timezone_accepts_valid_name() {
        let tz = resolve_timezone(Some("America/Los_Angeles"));
        assert_eq!(tz.name(), "America/Los_Angeles");
    }

    #[test]
    fn test_day_filtering_uses_local_date() {
        // 23:00 Eastern on the 13th is already the 14th in UTC; the local
        // date must win when filtering periods.
        let p = period("2025-03-13T23:00:00-04:00", 40, "Clear", false);
        let tz = resolve_timezone(None);
        let local = p.start_time.with_timezone(&tz).date_naive();
        assert_eq!(local, NaiveDate::from_ymd_opt(2025, 3, 13).unwrap());
    }
}
