//! Axum route handlers for the Wardrobe API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::clothing::{ClothingItem, MainCategory, Season};
use crate::state::AppState;
use crate::wardrobe::store::{self, NewClothingItem};

#[derive(Debug, Deserialize)]
pub struct WardrobeQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct WardrobeResponse {
    pub items: Vec<ClothingItem>,
}

/// Item-creation body. `main_category` is validated by the closed enum at
/// deserialization time; unknown categories never reach the store.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub user_id: Uuid,
    pub name: String,
    pub main_category: MainCategory,
    pub sub_category: Option<String>,
    pub style: Option<String>,
    pub fit: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub seasons: Option<Vec<Season>>,
    pub image_url: Option<String>,
}

/// GET /api/v1/wardrobe?user_id=…
///
/// Lists one user's inventory in upload order.
pub async fn handle_list_items(
    State(state): State<AppState>,
    Query(query): Query<WardrobeQuery>,
) -> Result<Json<WardrobeResponse>, AppError> {
    let items = store::fetch_items(&state.db, query.user_id).await?;
    Ok(Json(WardrobeResponse { items }))
}

/// POST /api/v1/wardrobe
///
/// Creates an item from JSON metadata. The photo itself is stored by the
/// upload collaborator; this endpoint only records its URL.
pub async fn handle_create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<Json<ClothingItem>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let item = store::insert_item(
        &state.db,
        NewClothingItem {
            user_id: request.user_id,
            name: request.name,
            main_category: request.main_category,
            sub_category: request.sub_category,
            style: request.style,
            fit: request.fit,
            size: request.size,
            color: request.color,
            seasons: request.seasons,
            image_url: request.image_url,
        },
    )
    .await?;

    Ok(Json(item))
}
