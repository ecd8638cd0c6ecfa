use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;
use salonfront_api::{app, ApiState};
use salonfront_db::{
    mock::repositories::{MockAppointmentRepo, MockSessionRepo},
    models::DbPromotionalBanner,
    repositories::BannerRepository,
};
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{body_json, request, send, TestContext, LOGIN_PATH, SESSION_COOKIE};

const BANNERS_URI: &str = "/api/promotional-banners";

fn db_banner(
    title: &str,
    priority: i32,
    created_at: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
) -> DbPromotionalBanner {
    DbPromotionalBanner {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some("Seasonal offer".to_string()),
        image_url: None,
        link_url: Some("/services".to_string()),
        button_text: None,
        is_active: true,
        start_date: Utc::now() - Duration::days(1),
        end_date,
        priority,
        created_at,
    }
}

fn titles(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|banner| banner["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_banners_sorted_by_priority_then_recency() {
    let now = Utc::now();
    let mut ctx = TestContext::new();
    ctx.banners.expect_list_visible().times(1).returning(move |_| {
        Ok(vec![
            db_banner("low", 1, now - Duration::hours(1), None),
            db_banner("high-old", 10, now - Duration::days(5), None),
            db_banner("high-new", 10, now - Duration::hours(2), None),
        ])
    });
    let app = ctx.into_app();

    let response = send(&app, request(Method::GET, BANNERS_URI, None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        titles(&body_json(response).await),
        vec!["high-new", "high-old", "low"]
    );
}

#[tokio::test]
async fn test_expired_banner_is_not_returned() {
    let now = Utc::now();
    let yesterday = now - Duration::days(1);
    let mut ctx = TestContext::new();
    ctx.banners.expect_list_visible().returning(move |_| {
        Ok(vec![
            db_banner("A", 10, now - Duration::days(2), None),
            db_banner("B", 10, now - Duration::days(2), Some(yesterday)),
        ])
    });
    let app = ctx.into_app();

    let response = send(&app, request(Method::GET, BANNERS_URI, None, None)).await;

    assert_eq!(titles(&body_json(response).await), vec!["A"]);
}

#[tokio::test]
async fn test_no_visible_banners_is_empty_array() {
    let mut ctx = TestContext::new();
    ctx.banners.expect_list_visible().returning(|_| Ok(Vec::new()));
    let app = ctx.into_app();

    let response = send(&app, request(Method::GET, BANNERS_URI, None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_banner_query_failure_is_generic_500() {
    let mut ctx = TestContext::new();
    ctx.banners
        .expect_list_visible()
        .returning(|_| Err(eyre::eyre!("relation \"promotional_banners\" does not exist")));
    let app = ctx.into_app();

    let response = send(&app, request(Method::GET, BANNERS_URI, None, None)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to fetch promotional banners" })
    );
}

#[tokio::test]
async fn test_banners_need_no_session() {
    let mut ctx = TestContext::new();
    ctx.sessions.expect_current_user().never();
    ctx.banners.expect_list_visible().returning(|_| Ok(Vec::new()));
    let app = ctx.into_app();

    let response = send(&app, request(Method::GET, BANNERS_URI, None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

struct PanickingBannerRepo;

#[async_trait]
impl BannerRepository for PanickingBannerRepo {
    async fn list_visible(&self, _now: DateTime<Utc>) -> eyre::Result<Vec<DbPromotionalBanner>> {
        panic!("connection pool was dropped");
    }
}

#[tokio::test]
async fn test_banner_handler_panic_is_generic_500() {
    let state = Arc::new(ApiState::new(
        Arc::new(MockAppointmentRepo::new()),
        Arc::new(PanickingBannerRepo),
        Arc::new(MockSessionRepo::new()),
        LOGIN_PATH,
        SESSION_COOKIE,
    ));
    let app = app(state);

    let response = send(&app, request(Method::GET, BANNERS_URI, None, None)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Internal server error" })
    );
}
