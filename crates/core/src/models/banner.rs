use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionalBanner {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub button_text: Option<String>,
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    /// `None` means the banner never expires.
    pub end_date: Option<DateTime<Utc>>,
    /// Higher values are shown first.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl PromotionalBanner {
    /// A banner is visible when it is switched on and `now` falls inside its
    /// window. Both bounds are inclusive.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date <= now
            && self.end_date.is_none_or(|end| end >= now)
    }

    /// Display order: priority descending, then newest first.
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.created_at.cmp(&self.created_at))
    }
}

/// Keeps only the banners visible at `now` and sorts them for display.
pub fn visible_banners(
    banners: impl IntoIterator<Item = PromotionalBanner>,
    now: DateTime<Utc>,
) -> Vec<PromotionalBanner> {
    let mut visible: Vec<_> = banners
        .into_iter()
        .filter(|banner| banner.is_visible_at(now))
        .collect();
    visible.sort_by(PromotionalBanner::display_order);
    visible
}
