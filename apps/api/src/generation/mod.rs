// Outfit generation pipeline: prompt synthesis, completion parsing, fuzzy
// item matching, and the calendar/custom assemblers. All completion calls go
// through llm_client — no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod item_matcher;
pub mod prompts;
pub mod response_parser;
