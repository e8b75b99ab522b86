//! Outfit assembly — orchestrates the full generation pipeline.
//!
//! Calendar mode: preconditions → per-date forecasts (concurrent) → one
//! prompt per remaining day → completions (concurrent) → parse → match →
//! ordered outfit list. Custom mode: one prompt, one outfit.
//!
//! Failures are isolated to the smallest unit: a day without forecast data is
//! dropped, a completion that cannot be parsed becomes one error-flagged
//! entry, and neither disturbs the other days in the batch.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::item_matcher::match_items;
use crate::generation::prompts::{build_calendar_prompt, build_custom_prompt};
use crate::generation::response_parser::parse_suggestion;
use crate::llm_client::{CompletionClient, COMPLETION_FAILED};
use crate::models::clothing::ClothingItem;
use crate::models::outfit::{Outfit, OutfitWeather};
use crate::wardrobe::categorizer::categorize;
use crate::wardrobe::store;
use crate::weather::{ForecastProvider, WeatherSummary};

const FAILED_OUTFIT_NAME: &str = "Failed to generate outfit";

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRequest {
    pub user_id: Uuid,
    pub dates: Vec<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomRequest {
    pub user_id: Uuid,
    pub preferences: Option<String>,
    pub weather: Option<String>,
    pub temperature: Option<String>,
}

/// Generation outcome. Precondition failures are carried as
/// `success: false` with a message — they are not transport errors.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outfits: Option<Vec<Outfit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GenerateResponse {
    fn ok(outfits: Vec<Outfit>) -> Self {
        Self {
            success: true,
            outfits: Some(outfits),
            message: None,
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            success: false,
            outfits: None,
            message: Some(message.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar mode
// ────────────────────────────────────────────────────────────────────────────

/// Runs the calendar-mode pipeline for one user and a list of dates.
///
/// Preconditions fail fast with a structured non-success response: missing
/// dates, unknown profile, unresolved location, empty inventory. Dates with
/// no forecast data are dropped; the remaining outfits come back in input
/// date order.
pub async fn generate_calendar_outfits(
    pool: &PgPool,
    llm: Arc<dyn CompletionClient>,
    forecast: Arc<dyn ForecastProvider>,
    request: CalendarRequest,
) -> Result<GenerateResponse, AppError> {
    if request.dates.is_empty() {
        return Ok(GenerateResponse::rejected("Select at least one date"));
    }

    let Some(profile) = store::fetch_profile(pool, request.user_id).await? else {
        return Ok(GenerateResponse::rejected("User profile not found"));
    };

    let (Some(latitude), Some(longitude)) = (profile.latitude, profile.longitude) else {
        return Ok(GenerateResponse::rejected(
            "Update your location before generating outfits",
        ));
    };

    let inventory = store::fetch_items(pool, request.user_id).await?;
    if inventory.is_empty() {
        return Ok(GenerateResponse::rejected(
            "Upload clothes before generating outfits",
        ));
    }

    let notes = request.notes.as_deref().unwrap_or("");
    let outfits = assemble_calendar_outfits(
        llm,
        forecast,
        latitude,
        longitude,
        profile.timezone.as_deref(),
        &inventory,
        &request.dates,
        notes,
    )
    .await;

    info!(
        user_id = %request.user_id,
        requested = request.dates.len(),
        generated = outfits.len(),
        "calendar generation complete"
    );

    Ok(GenerateResponse::ok(outfits))
}

/// The pure-orchestration half of calendar mode, taking inventory and
/// location directly so it can run against fake ports.
#[allow(clippy::too_many_arguments)]
async fn assemble_calendar_outfits(
    llm: Arc<dyn CompletionClient>,
    forecast: Arc<dyn ForecastProvider>,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
    inventory: &[ClothingItem],
    dates: &[NaiveDate],
    notes: &str,
) -> Vec<Outfit> {
    // One independent lookup per requested date, joined in input order so the
    // output follows the request rather than completion arrival.
    let mut lookups = Vec::with_capacity(dates.len());
    for &date in dates {
        let provider = Arc::clone(&forecast);
        let timezone = timezone.map(String::from);
        lookups.push(tokio::spawn(async move {
            provider
                .daily_forecast(latitude, longitude, date, timezone.as_deref())
                .await
        }));
    }

    let mut weather_days: Vec<WeatherSummary> = Vec::new();
    for (lookup, &date) in lookups.into_iter().zip(dates) {
        match lookup.await {
            Ok(Ok(Some(summary))) => weather_days.push(summary),
            Ok(Ok(None)) => warn!(%date, "no forecast data, dropping date"),
            Ok(Err(e)) => warn!(%date, "forecast lookup failed, dropping date: {e}"),
            Err(e) => warn!(%date, "forecast task panicked, dropping date: {e}"),
        }
    }

    let categorized = categorize(inventory);

    let mut completions = Vec::with_capacity(weather_days.len());
    for weather in &weather_days {
        let prompt = build_calendar_prompt(weather, &categorized, notes);
        let llm = Arc::clone(&llm);
        completions.push(tokio::spawn(async move { llm.complete(&prompt).await }));
    }

    let mut outfits = Vec::with_capacity(weather_days.len());
    for (completion, weather) in completions.into_iter().zip(&weather_days) {
        let raw = match completion.await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(date = %weather.date, "completion task panicked: {e}");
                COMPLETION_FAILED.to_string()
            }
        };
        outfits.push(assemble_outfit(weather, raw, inventory));
    }

    outfits
}

/// Parses and matches one completion into an `Outfit` for one forecast day.
/// A completion with no usable item list yields an error-flagged entry.
fn assemble_outfit(weather: &WeatherSummary, raw: String, inventory: &[ClothingItem]) -> Outfit {
    let parsed = parse_suggestion(&raw);

    if parsed.is_empty() {
        warn!(date = %weather.date, raw = %raw, "completion did not follow the response format");
        return Outfit {
            date: Some(weather.date),
            weather: OutfitWeather::Forecast(weather.clone()),
            name: FAILED_OUTFIT_NAME.to_string(),
            items: Vec::new(),
            styling_tips: String::new(),
            raw,
            error: true,
        };
    }

    let items = match_items(&parsed.suggested_item_names, inventory);

    Outfit {
        date: Some(weather.date),
        weather: OutfitWeather::Forecast(weather.clone()),
        name: parsed.outfit_name,
        items,
        styling_tips: parsed.styling_tips,
        raw,
        error: false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Custom mode
// ────────────────────────────────────────────────────────────────────────────

/// Runs the custom-mode pipeline: free-text preferences/weather/temperature,
/// exactly one outfit. At least one of the three inputs is required.
pub async fn generate_custom_outfit(
    pool: &PgPool,
    llm: Arc<dyn CompletionClient>,
    request: CustomRequest,
) -> Result<GenerateResponse, AppError> {
    let preferences = non_empty(request.preferences.as_deref());
    let weather = non_empty(request.weather.as_deref());
    let temperature = non_empty(request.temperature.as_deref());

    if preferences.is_none() && weather.is_none() && temperature.is_none() {
        return Ok(GenerateResponse::rejected(
            "Provide at least one input for generation",
        ));
    }

    let inventory = store::fetch_items(pool, request.user_id).await?;
    if inventory.is_empty() {
        return Ok(GenerateResponse::rejected(
            "Upload clothes before generating outfits",
        ));
    }

    let categorized = categorize(&inventory);
    let prompt = build_custom_prompt(&categorized, preferences, weather, temperature);
    let raw = llm.complete(&prompt).await;

    match assemble_custom_outfit(raw, &inventory, weather, temperature) {
        Some(outfit) => Ok(GenerateResponse::ok(vec![outfit])),
        None => Ok(GenerateResponse::rejected(
            "Failed to generate outfit. Try again later.",
        )),
    }
}

/// Parses and matches one custom completion. Returns `None` when the
/// completion carried no usable item list — custom mode reports a failure
/// message instead of an error-flagged entry.
fn assemble_custom_outfit(
    raw: String,
    inventory: &[ClothingItem],
    weather: Option<&str>,
    temperature: Option<&str>,
) -> Option<Outfit> {
    let parsed = parse_suggestion(&raw);

    if parsed.is_empty() {
        warn!(raw = %raw, "custom completion did not follow the response format");
        return None;
    }

    let items = match_items(&parsed.suggested_item_names, inventory);

    Some(Outfit {
        date: None,
        weather: OutfitWeather::Custom {
            condition: weather.unwrap_or("Not specified").to_string(),
            temperature: temperature.unwrap_or("Not provided").to_string(),
        },
        name: parsed.outfit_name,
        items,
        styling_tips: parsed.styling_tips,
        raw,
        error: false,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
