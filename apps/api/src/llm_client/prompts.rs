// Cross-cutting prompt fragments shared by all completion calls.

/// System prompt for every outfit completion.
pub const STYLIST_SYSTEM: &str =
    "You are an AI stylist suggesting outfits based on the weather and available clothes.";
