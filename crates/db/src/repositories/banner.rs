use crate::{models::DbPromotionalBanner, DbPool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Banners visible at `now`. The Postgres store filters and orders in SQL;
    /// callers still pass the rows through `visible_banners` before display.
    async fn list_visible(&self, now: DateTime<Utc>) -> Result<Vec<DbPromotionalBanner>>;
}

#[derive(Debug, Clone)]
pub struct PgBannerRepository {
    pool: DbPool,
}

impl PgBannerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerRepository for PgBannerRepository {
    async fn list_visible(&self, now: DateTime<Utc>) -> Result<Vec<DbPromotionalBanner>> {
        get_visible_banners(&self.pool, now).await
    }
}

pub async fn get_visible_banners(
    pool: &Pool<Postgres>,
    now: DateTime<Utc>,
) -> Result<Vec<DbPromotionalBanner>> {
    let banners = sqlx::query_as::<_, DbPromotionalBanner>(
        r#"
        SELECT id, title, description, image_url, link_url, button_text,
               is_active, start_date, end_date, priority, created_at
        FROM promotional_banners
        WHERE is_active = TRUE
          AND start_date <= $1
          AND (end_date IS NULL OR end_date >= $1)
        ORDER BY priority DESC, created_at DESC
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(banners)
}
