//! Prompt synthesis — turns categorized inventory, weather, and free-text
//! user input into one generation request string.
//!
//! The response-format contract here (`Outfit:` / `Items:` / `Styling:`) is
//! what `response_parser` extracts; keep the two in sync.

use crate::models::clothing::ClothingItem;
use crate::wardrobe::categorizer::CategorizedInventory;
use crate::weather::guidance::guidance_for;
use crate::weather::WeatherSummary;

/// Rendered for an empty category so the model never assumes availability.
const NONE_AVAILABLE: &str = "None available";

/// Builds the calendar-mode prompt for one forecast day.
///
/// User notes are embedded verbatim — they come from the authenticated owner
/// of the inventory and only ever reach the completion provider.
pub fn build_calendar_prompt(
    weather: &WeatherSummary,
    categorized: &CategorizedInventory<'_>,
    notes: &str,
) -> String {
    let guidance = guidance_for(weather);
    let guidance_block = if guidance.is_empty() {
        String::new()
    } else {
        format!("\nWEATHER GUIDANCE:\n{guidance}\n")
    };

    format!(
        "Create a complete outfit for {date} with weather: {condition} ({min}\u{b0}F-{max}\u{b0}F).\n\
        \n\
        AVAILABLE CLOTHING:\n\
        - TOPS: {tops}\n\
        - BOTTOMS: {bottoms}\n\
        - OUTERWEAR: {outerwear}\n\
        - FOOTWEAR: {footwear}\n\
        - ACCESSORIES: {accessories}\n\
        {guidance_block}\
        \n\
        OUTFIT REQUIREMENTS:\n\
        1. Select ONE top, ONE bottom, and outerwear appropriate for the temperature. If the user needs it to be formal, include formal wear like blazers.\n\
        2. Select ONE footwear option appropriate for the weather.\n\
        3. Include 1-2 accessories if available and appropriate.\n\
        4. Create a cohesive outfit with matching colors and styles.\n\
        5. Be creative and choose a different outfit every time, not the same pants or shirt, as long as it makes sense.\n\
        6. HERE ARE SPECIFIC NOTES FROM THE USER - FOLLOW THESE: {notes}\n\
        \n\
        STYLING GUIDANCE:\n\
        - Provide specific advice for this outfit (e.g., \"Tuck in the shirt\", \"Roll up the sleeves\").\n\
        - Include weather-specific styling tips (e.g., \"Bring an umbrella\", \"Layer for changing temperatures\").\n\
        - Suggest how to wear the items together for best comfort and style.\n\
        \n\
        RESPONSE FORMAT:\n\
        Outfit: [Creative Name But Not Corny]\n\
        Items: [item1], [item2], [item3], [item4]\n\
        Styling: [3 specific styling tips]\n\
        \n\
        DO NOT make up items that are not in the lists. Use ONLY the exact item names provided.\n\
        Do NOT use markdown or bold markers (**) anywhere in the response.\n",
        date = weather.date,
        condition = weather.condition,
        min = weather.min_temp,
        max = weather.max_temp,
        tops = detailed_listing(&categorized.tops, true),
        bottoms = detailed_listing(&categorized.bottoms, true),
        outerwear = detailed_listing(&categorized.outerwear, true),
        footwear = detailed_listing(&categorized.footwear, false),
        accessories = accessories_listing(&categorized.accessories),
    )
}

/// Builds the custom-mode prompt from free-text user input. Absent inputs
/// render an explicit "No specific …" fallback rather than an empty slot.
pub fn build_custom_prompt(
    categorized: &CategorizedInventory<'_>,
    preferences: Option<&str>,
    weather: Option<&str>,
    temperature: Option<&str>,
) -> String {
    let temperature = match temperature {
        Some(t) => format!("{t}\u{b0}F"),
        None => "No specific temperature provided".to_string(),
    };

    format!(
        "Create a complete outfit based on the following user input:\n\
        \n\
        USER PREFERENCES: \"{preferences}\"\n\
        WEATHER: \"{weather}\"\n\
        TEMPERATURE: \"{temperature}\"\n\
        \n\
        AVAILABLE CLOTHING:\n\
        - TOPS: {tops}\n\
        - BOTTOMS: {bottoms}\n\
        - OUTERWEAR: {outerwear}\n\
        - FOOTWEAR: {footwear}\n\
        - ACCESSORIES: {accessories}\n\
        \n\
        OUTFIT REQUIREMENTS:\n\
        1. Select ONE top, ONE bottom, and appropriate outerwear if necessary.\n\
        2. Select suitable footwear for the weather.\n\
        3. Include 1-2 accessories if available.\n\
        4. Outfit must be stylish and match color-wise.\n\
        5. Be creative and generate different outfits each time.\n\
        6. Follow user preferences strictly.\n\
        \n\
        STYLING GUIDANCE:\n\
        - Provide 3 specific tips for styling the outfit.\n\
        \n\
        RESPONSE FORMAT:\n\
        Outfit: [Creative Name But Not Corny]\n\
        Items: [item1], [item2], [item3], [item4]\n\
        Styling: [3 specific styling tips]\n\
        \n\
        DO NOT make up items. Use only the provided clothing list.\n\
        Do NOT use markdown or bold markers (**) anywhere in the response.\n",
        preferences = preferences.unwrap_or("No specific preferences"),
        weather = weather.unwrap_or("No specific condition provided"),
        tops = short_listing(&categorized.tops),
        bottoms = short_listing(&categorized.bottoms),
        outerwear = short_listing(&categorized.outerwear),
        footwear = short_listing(&categorized.footwear),
        accessories = short_listing(&categorized.accessories),
    )
}

fn join_or_none(entries: Vec<String>) -> String {
    if entries.is_empty() {
        NONE_AVAILABLE.to_string()
    } else {
        entries.join(", ")
    }
}

/// `name (sub, size, color, fit)` — fit included for tops/bottoms/outerwear,
/// omitted for footwear.
fn detailed_listing(items: &[&ClothingItem], with_fit: bool) -> String {
    join_or_none(
        items
            .iter()
            .map(|item| {
                let sub = item.sub_category.as_deref().unwrap_or("unspecified");
                let size = item.size.as_deref().unwrap_or("unspecified size");
                let color = item.color.as_deref().unwrap_or("unspecified color");
                if with_fit {
                    let fit = item.fit.as_deref().unwrap_or("regular fit");
                    format!("{} ({sub}, {size}, {color}, {fit})", item.name)
                } else {
                    format!("{} ({sub}, {size}, {color})", item.name)
                }
            })
            .collect(),
    )
}

/// Accessories default to "one size" and never carry fit.
fn accessories_listing(items: &[&ClothingItem]) -> String {
    join_or_none(
        items
            .iter()
            .map(|item| {
                let sub = item.sub_category.as_deref().unwrap_or("unspecified");
                let size = item.size.as_deref().unwrap_or("one size");
                let color = item.color.as_deref().unwrap_or("unspecified color");
                format!("{} ({sub}, {size}, {color})", item.name)
            })
            .collect(),
    )
}

/// `name (sub, size)` — the compact form used by the custom prompt.
fn short_listing(items: &[&ClothingItem]) -> String {
    join_or_none(
        items
            .iter()
            .map(|item| {
                let sub = item.sub_category.as_deref().unwrap_or("unspecified");
                let size = item.size.as_deref().unwrap_or("one size");
                format!("{} ({sub}, {size})", item.name)
            })
            .collect(),
    )
}
