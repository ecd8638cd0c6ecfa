//! # Authentication Module
//!
//! Resolves the caller of a request from their session token.
//!
//! The token is read from the configured session cookie, or from an
//! `Authorization: Bearer` header for non-browser clients. Requests without a
//! live session are redirected to the login page before the handler body
//! runs, so no data-store work happens on their behalf.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use salonfront_core::errors::SalonError;
use tracing::{debug, error};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// The signed-in user making the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers, &state.session_cookie) else {
            debug!(path = %parts.uri.path(), "no session token, redirecting to login");
            return Err(Redirect::to(&state.login_path).into_response());
        };

        match state.sessions.current_user(&token).await {
            Ok(Some(user_id)) => Ok(CurrentUser(user_id)),
            Ok(None) => {
                debug!(path = %parts.uri.path(), "unknown or expired session, redirecting to login");
                Err(Redirect::to(&state.login_path).into_response())
            }
            Err(err) => {
                error!(error = ?err, "session lookup failed");
                Err(AppError(SalonError::Database(err)).into_response())
            }
        }
    }
}

/// Extracts the session token, preferring the cookie over a bearer header.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
