use axum::{extract::State, Json};
use chrono::Utc;
use salonfront_core::{
    errors::SalonError,
    models::banner::{visible_banners, PromotionalBanner},
};
use std::sync::Arc;
use tracing::error;

use crate::{middleware::error_handling::AppError, ApiState};

pub const BANNER_QUERY_FAILED: &str = "Failed to fetch promotional banners";

/// Public feed of the banners that are live right now.
///
/// An empty result is a normal `200 []`. Query failures become a 500 with a
/// fixed message; panics are caught by the router's panic layer instead.
#[axum::debug_handler]
pub async fn list_promotional_banners(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<PromotionalBanner>>, AppError> {
    let now = Utc::now();

    let rows = state.banners.list_visible(now).await.map_err(|err| {
        error!(error = ?err, "promotional banner query failed");
        SalonError::OperationFailed(BANNER_QUERY_FAILED)
    })?;

    let banners = visible_banners(rows.into_iter().map(PromotionalBanner::from), now);

    Ok(Json(banners))
}
