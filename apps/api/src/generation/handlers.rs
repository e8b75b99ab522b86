//! Axum route handlers for the Generation API.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{
    generate_calendar_outfits, generate_custom_outfit, CalendarRequest, CustomRequest,
    GenerateResponse,
};
use crate::state::AppState;

/// POST /api/v1/outfits/generate
///
/// Calendar mode: one outfit per requested date with forecast data.
/// Precondition failures come back as `success: false` payloads, not HTTP
/// errors.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CalendarRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_calendar_outfits(
        &state.db,
        Arc::clone(&state.llm),
        Arc::clone(&state.forecast),
        request,
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/v1/outfits/generate/custom
///
/// Custom mode: exactly one outfit from free-text preferences, weather, and
/// temperature. At least one of the three is required.
pub async fn handle_generate_custom(
    State(state): State<AppState>,
    Json(request): Json<CustomRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_custom_outfit(&state.db, Arc::clone(&state.llm), request).await?;

    Ok(Json(response))
}
