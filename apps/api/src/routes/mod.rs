pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::wardrobe::handlers as wardrobe;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wardrobe API
        .route(
            "/api/v1/wardrobe",
            get(wardrobe::handle_list_items).post(wardrobe::handle_create_item),
        )
        // Generation API
        .route("/api/v1/outfits/generate", post(generation::handle_generate))
        .route(
            "/api/v1/outfits/generate/custom",
            post(generation::handle_generate_custom),
        )
        .with_state(state)
}
