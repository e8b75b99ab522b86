//! Persistence surface for profiles and wardrobe items. Generation treats
//! this as a read-only collaborator; item creation normalizes upload input.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::clothing::{ClothingItem, MainCategory, Season};
use crate::models::user::UserProfile;

/// New-item input as the upload collaborator hands it over (file storage has
/// already happened; `image_url` points at the stored photo).
#[derive(Debug, Clone)]
pub struct NewClothingItem {
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

pub async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Returns one user's full inventory in stable upload order.
pub async fn fetch_items(pool: &PgPool, user_id: Uuid) -> Result<Vec<ClothingItem>, sqlx::Error> {
    sqlx::query_as::<_, ClothingItem>(
        "SELECT * FROM wardrobe_items WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Inserts a wardrobe item. Name and size are trimmed, size uppercased, and
/// seasons default to all four — the same normalization upload applies.
pub async fn insert_item(pool: &PgPool, new: NewClothingItem) -> Result<ClothingItem, sqlx::Error> {
    let name = new.name.trim().to_string();
    let size = new.size.map(|s| s.trim().to_uppercase());
    let seasons = match new.seasons {
        Some(seasons) if !seasons.is_empty() => seasons,
        _ => Season::all(),
    };

    sqlx::query_as::<_, ClothingItem>(
        r#"
        INSERT INTO wardrobe_items
            (id, user_id, name, main_category, sub_category, style, fit, size, color, seasons, image_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.user_id)
    .bind(name)
    .bind(new.main_category)
    .bind(new.sub_category)
    .bind(new.style)
    .bind(new.fit)
    .bind(size)
    .bind(new.color)
    .bind(seasons)
    .bind(new.image_url)
    .fetch_one(pool)
    .await
}
