//! Weather guidance — maps a day's forecast to a qualitative styling hint
//! for prompt construction.
//!
//! Classification is evaluated in fixed priority order, first match wins:
//! rain/storm > snow > cold > hot > none. A rainy-and-cold day therefore
//! yields only the rain guidance. This ordering is intentional policy.

use crate::weather::WeatherSummary;

const RAINY: &str =
    "Include waterproof or water-resistant items. Prioritize items that keep the person dry.";
const SNOWY: &str = "Prioritize warm, insulated items and waterproof footwear.";
const COLD: &str = "Focus on layering and warmth. Include appropriate outerwear.";
const HOT: &str = "Select lightweight, breathable clothing suitable for hot weather.";

/// Temperatures in °F.
const COLD_BELOW: i32 = 50;
const HOT_ABOVE: i32 = 75;

/// Returns the styling guidance for a day, or `""` when no rule applies.
pub fn guidance_for(weather: &WeatherSummary) -> &'static str {
    let condition = weather.condition.to_lowercase();

    if condition.contains("rain") || condition.contains("storm") {
        RAINY
    } else if condition.contains("snow") {
        SNOWY
    } else if weather.min_temp < COLD_BELOW {
        COLD
    } else if weather.max_temp > HOT_ABOVE {
        HOT
    } else {
        ""
    }
}
