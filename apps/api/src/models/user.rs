use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user profile as the auth collaborator resolves it. Generation only needs
/// the location and timezone for forecast lookups.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub display_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA timezone name, e.g. "America/New_York".
    pub timezone: Option<String>,
    pub created_at: DateTime<Utc>,
}
