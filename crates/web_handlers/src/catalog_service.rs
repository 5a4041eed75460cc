use account_services::types::User;
use sqlx::PgPool;

use crate::catalog_types::{CatalogError, Slip};

/// Read-only service projecting slips and users for the catalog endpoints
pub struct CatalogService {
    pool: PgPool,
}

impl CatalogService {
    /// Creates a new instance of `CatalogService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets all slips in id order
    pub async fn get_slips(&self) -> Result<Vec<Slip>, CatalogError> {
        let slips = sqlx::query_as::<_, Slip>(
            r#"
            SELECT
                id, name, max_length, width, depth, price_per_night,
                amenities, description, dock_etiquette, available, images,
                created_at, updated_at
            FROM slips
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(slips)
    }

    /// Gets all users in id order
    pub async fn get_users(&self) -> Result<Vec<User>, CatalogError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id, name, email, password_hash, phone, user_type,
                created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
