use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use crate::user::model::{NewUser, User};

/// Create/read operations over the users table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new record and return the generated id. Returns 0 if the
    /// store yields no id for the insert.
    async fn create(&self, new_row: &NewUser) -> anyhow::Result<i32>;

    /// Get a single record by id, or None when no row matches.
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<User>>;
}

/// PostgreSQL-backed repository. Owns the connection handle it was
/// constructed with.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_row: &NewUser) -> anyhow::Result<i32> {
        let mut tx = self.pool.begin().await?;

        let new_id: Option<(i32,)> = sqlx::query_as(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&new_row.username)
        .bind(&new_row.email)
        .fetch_optional(&mut *tx)
        .await?;

        match new_id {
            Some((id,)) => {
                tx.commit().await?;
                Ok(id)
            }
            None => {
                warn!(username = %new_row.username, "insert returned no id");
                Ok(0)
            }
        }
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, dt_created, username, email, mobile
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

/// Construct the store-specific repository behind the trait.
pub fn new_user_repo(pool: PgPool) -> impl UserRepository {
    PgUserRepository::new(pool)
}
