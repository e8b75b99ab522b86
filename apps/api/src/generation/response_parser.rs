//! Response parser — extracts the (name, items, styling) triple from raw
//! completion text via the fixed section markers.
//!
//! Deliberately tolerant and infallible: every marker is independent, a
//! missing marker falls back to a default, and no input (including the
//! completion-failure sentinel) can make parsing panic or error. Format
//! deviations surface downstream as an empty suggestion, never as a crash.

const OUTFIT_MARKER: &str = "Outfit:";
const ITEMS_MARKER: &str = "Items:";
const STYLING_MARKER: &str = "Styling:";

const DEFAULT_NAME: &str = "Outfit";

/// Structured extraction from one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSuggestion {
    pub outfit_name: String,
    pub suggested_item_names: Vec<String>,
    pub styling_tips: String,
}

impl ParsedSuggestion {
    /// True when the completion carried no usable item list — the marker was
    /// absent or empty. Such suggestions become error-flagged outfits.
    pub fn is_empty(&self) -> bool {
        self.suggested_item_names.is_empty()
    }
}

/// Parses raw completion text. Markers are recognized only at the start of a
/// line; `Styling:` captures to the end of the input (multi-line).
pub fn parse_suggestion(raw: &str) -> ParsedSuggestion {
    let outfit_name = line_value(raw, OUTFIT_MARKER)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_NAME)
        .to_string();

    let suggested_item_names = line_value(raw, ITEMS_MARKER)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let styling_tips = tail_value(raw, STYLING_MARKER).unwrap_or_default();

    ParsedSuggestion {
        outfit_name,
        suggested_item_names,
        styling_tips,
    }
}

/// Text after a line-leading marker, up to the end of that line, trimmed.
fn line_value<'a>(raw: &'a str, marker: &str) -> Option<&'a str> {
    raw.lines()
        .find_map(|line| line.strip_prefix(marker))
        .map(str::trim)
}

/// Text after a line-leading marker, through the end of the input, trimmed.
fn tail_value(raw: &str, marker: &str) -> Option<String> {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if let Some(rest) = line.strip_prefix(marker) {
            let start = offset + (line.len() - rest.len());
            return Some(raw[start..].trim().to_string());
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_response_round_trips() {
        let raw = "Outfit: Rainy Day Look\nItems: Blue Jeans, White Tee\nStyling: Layer up.";
        let parsed = parse_suggestion(raw);
        assert_eq!(parsed.outfit_name, "Rainy Day Look");
        assert_eq!(parsed.suggested_item_names, vec!["Blue Jeans", "White Tee"]);
        assert_eq!(parsed.styling_tips, "Layer up.");
    }

    #[test]
    fn test_missing_items_marker_yields_empty_list() {
        let raw = "Outfit: Minimal\nStyling: Keep it simple.";
        let parsed = parse_suggestion(raw);
        assert!(parsed.suggested_item_names.is_empty());
        assert!(parsed.is_empty());
        assert_eq!(parsed.outfit_name, "Minimal");
    }

    #[test]
    fn test_missing_outfit_marker_defaults_name() {
        let raw = "Items: Blue Jeans\nStyling: Cuff the hems.";
        let parsed = parse_suggestion(raw);
        assert_eq!(parsed.outfit_name, "Outfit");
        assert_eq!(parsed.suggested_item_names, vec!["Blue Jeans"]);
    }

    #[test]
    fn test_styling_captures_multiple_lines() {
        let raw = "Outfit: A\nItems: B\nStyling: Tip one.\nTip two.\nTip three.";
        let parsed = parse_suggestion(raw);
        assert_eq!(parsed.styling_tips, "Tip one.\nTip two.\nTip three.");
    }

    #[test]
    fn test_item_segments_are_trimmed_and_empty_dropped() {
        let raw = "Items:  Blue Jeans ,  White Tee , , Sneakers,";
        let parsed = parse_suggestion(raw);
        assert_eq!(
            parsed.suggested_item_names,
            vec!["Blue Jeans", "White Tee", "Sneakers"]
        );
    }

    #[test]
    fn test_markers_must_lead_a_line() {
        let raw = "Your Outfit: Nope\nThe Items: Also nope";
        let parsed = parse_suggestion(raw);
        assert_eq!(parsed.outfit_name, "Outfit");
        assert!(parsed.suggested_item_names.is_empty());
    }

    #[test]
    fn test_crlf_line_endings_are_tolerated() {
        let raw = "Outfit: Crisp\r\nItems: White Tee\r\nStyling: Iron it.";
        let parsed = parse_suggestion(raw);
        assert_eq!(parsed.outfit_name, "Crisp");
        assert_eq!(parsed.suggested_item_names, vec!["White Tee"]);
        assert_eq!(parsed.styling_tips, "Iron it.");
    }

    #[test]
    fn test_failure_sentinel_parses_to_defaults() {
        let parsed = parse_suggestion(crate::llm_client::COMPLETION_FAILED);
        assert_eq!(parsed.outfit_name, "Outfit");
        assert!(parsed.is_empty());
        assert_eq!(parsed.styling_tips, "");
    }

    #[test]
    fn test_empty_input_parses_to_defaults() {
        let parsed = parse_suggestion("");
        assert_eq!(parsed.outfit_name, "Outfit");
        assert!(parsed.suggested_item_names.is_empty());
        assert_eq!(parsed.styling_tips, "");
    }

    #[test]
    fn test_first_marker_occurrence_wins() {
        let raw = "Outfit: First\nOutfit: Second\nItems: A";
        let parsed = parse_suggestion(raw);
        assert_eq!(parsed.outfit_name, "First");
    }
}
