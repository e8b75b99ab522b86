use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Upper bound sized for the wardrobe workload: generation batches read the
/// inventory once per request, so connections are short-lived.
const MAX_CONNECTIONS: u32 = 10;

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new().max_connections(MAX_CONNECTIONS)
}

/// Connects to the database holding `user_profiles` and `wardrobe_items`.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to the wardrobe database...");

    let pool = pool_options().connect(database_url).await?;

    info!("Wardrobe database pool ready (max {MAX_CONNECTIONS} connections)");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_cap_connections() {
        assert_eq!(pool_options().get_max_connections(), MAX_CONNECTIONS);
    }
}
