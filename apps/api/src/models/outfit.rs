use chrono::NaiveDate;
use serde::Serialize;

use crate::models::clothing::ClothingItem;
use crate::weather::WeatherSummary;

/// Weather context attached to a generated outfit: either a real forecast
/// summary (calendar mode) or the user's own free-text description (custom).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutfitWeather {
    Forecast(WeatherSummary),
    Custom { condition: String, temperature: String },
}

/// A fully assembled outfit recommendation.
///
/// `items` is already resolved against the user's inventory and holds at most
/// one item per main category. `raw` keeps the unedited completion text for
/// debugging and client display.
#[derive(Debug, Clone, Serialize)]
pub struct Outfit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub weather: OutfitWeather,
    pub name: String,
    pub items: Vec<ClothingItem>,
    pub styling_tips: String,
    pub raw: String,
    pub error: bool,
}
