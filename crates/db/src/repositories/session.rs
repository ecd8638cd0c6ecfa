use crate::DbPool;
use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Resolves a session token to the signed-in user.
///
/// Sessions are issued by the authentication provider; this service only
/// reads them. Unknown and expired tokens both resolve to `None`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn current_user(&self, token: &str) -> Result<Option<Uuid>>;
}

#[derive(Debug, Clone)]
pub struct PgSessionStore {
    pool: DbPool,
}

impl PgSessionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn current_user(&self, token: &str) -> Result<Option<Uuid>> {
        get_session_user_id(&self.pool, token).await
    }
}

pub async fn get_session_user_id(pool: &Pool<Postgres>, token: &str) -> Result<Option<Uuid>> {
    let user_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT user_id
        FROM sessions
        WHERE token = $1 AND expires_at > $2
        "#,
    )
    .bind(token)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(user_id)
}
