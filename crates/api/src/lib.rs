//! # Salonfront API
//!
//! HTTP surface of the salon storefront: appointment actions for signed-in
//! customers and the public promotional banner feed.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Session lookup and error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! Data-store and session access go through the repository traits from
//! `salonfront_db`, so handlers can be driven with mocks in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use salonfront_db::{
    repositories::{
        AppointmentRepository, BannerRepository, PgAppointmentRepository, PgBannerRepository,
        PgSessionStore, SessionStore,
    },
    DbPool,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub appointments: Arc<dyn AppointmentRepository>,
    pub banners: Arc<dyn BannerRepository>,
    pub sessions: Arc<dyn SessionStore>,
    /// Redirect target for callers without a valid session
    pub login_path: String,
    /// Cookie that carries the session token
    pub session_cookie: String,
}

impl ApiState {
    pub fn new(
        appointments: Arc<dyn AppointmentRepository>,
        banners: Arc<dyn BannerRepository>,
        sessions: Arc<dyn SessionStore>,
        login_path: impl Into<String>,
        session_cookie: impl Into<String>,
    ) -> Self {
        Self {
            appointments,
            banners,
            sessions,
            login_path: login_path.into(),
            session_cookie: session_cookie.into(),
        }
    }

    /// Wires the Postgres-backed repositories.
    pub fn from_pool(db_pool: DbPool, config: &config::ApiConfig) -> Self {
        Self::new(
            Arc::new(PgAppointmentRepository::new(db_pool.clone())),
            Arc::new(PgBannerRepository::new(db_pool.clone())),
            Arc::new(PgSessionStore::new(db_pool)),
            config.login_path.clone(),
            config.session_cookie.clone(),
        )
    }
}

/// Builds the application router with all routes, request tracing and
/// panic recovery attached.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Customer appointment actions
        .merge(routes::appointment::routes())
        // Promotional banner feed
        .merge(routes::banner::routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(middleware::error_handling::handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_pool(db_pool, &config));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
