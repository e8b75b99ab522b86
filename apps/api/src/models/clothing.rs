use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The five top-level clothing classes. Closed set — an item carries exactly
/// one, validated at deserialization time on upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "main_category", rename_all = "lowercase")]
pub enum MainCategory {
    Tops,
    Bottoms,
    Outerwear,
    Footwear,
    Accessories,
}

impl MainCategory {
    /// All categories in bucket order (the order they appear in prompts).
    pub const ALL: [MainCategory; 5] = [
        MainCategory::Tops,
        MainCategory::Bottoms,
        MainCategory::Outerwear,
        MainCategory::Footwear,
        MainCategory::Accessories,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "season", rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl sqlx::postgres::PgHasArrayType for Season {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_season")
    }
}

impl Season {
    pub fn all() -> Vec<Season> {
        vec![Season::Spring, Season::Summer, Season::Fall, Season::Winter]
    }
}

/// A single wardrobe item. Immutable after creation — generation only reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClothingItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub main_category: MainCategory,
    pub sub_category: Option<String>,
    pub style: Option<String>,
    pub fit: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub seasons: Vec<Season>,
    /// Set by the upload collaborator; never interpreted here.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
