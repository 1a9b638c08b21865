use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::state::AppState;

const COOKIE_NAME: &str = "standup_auth";
const COOKIE_VALUE: &str = "authenticated";
/// 30 days.
const COOKIE_MAX_AGE_SECONDS: u32 = 60 * 60 * 24 * 30;

// ---------------------------------------------------------------------------
// Login / logout
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct LoginBody {
    pub passphrase: String,
}

/// POST /api/auth/login — exchange the shared passphrase for a session
/// cookie. 401 on mismatch; 500 when no passphrase is configured at all.
pub async fn login(State(app): State<AppState>, Json(body): Json<LoginBody>) -> Response {
    let Some(expected) = app.passphrase.as_deref() else {
        let body = serde_json::json!({ "error": "authentication not configured" });
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    };

    if body.passphrase != expected {
        let body = serde_json::json!({ "error": "invalid passphrase" });
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let cookie = format!(
        "{COOKIE_NAME}={COOKIE_VALUE}; HttpOnly; SameSite=Lax; Path=/; Max-Age={COOKIE_MAX_AGE_SECONDS}"
    );
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "success": true })),
    )
        .into_response()
}

/// POST /api/auth/logout — expire the session cookie.
pub async fn logout() -> Response {
    let cookie = format!("{COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "success": true })),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Session gate
// ---------------------------------------------------------------------------

/// Axum middleware gating the API behind the session cookie.
///
/// Evaluated in order:
/// 1. No passphrase configured → passthrough (auth disabled)
/// 2. `/api/health` and `/api/auth/*` → passthrough (must stay reachable)
/// 3. Cookie `standup_auth=authenticated` present → passthrough
/// 4. Otherwise → 401 JSON
pub async fn require_session(State(app): State<AppState>, req: Request, next: Next) -> Response {
    if app.passphrase.is_none() {
        return next.run(req).await;
    }

    let path = req.uri().path();
    if path == "/api/health" || path.starts_with("/api/auth/") {
        return next.run(req).await;
    }

    if has_session_cookie(&req) {
        return next.run(req).await;
    }

    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"error":"unauthorized"}"#))
        .expect("infallible: all header values are valid ASCII")
}

fn has_session_cookie(req: &Request) -> bool {
    let Some(cookies) = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    cookies
        .split(';')
        .filter_map(|part| part.trim().strip_prefix(&format!("{COOKIE_NAME}=")))
        .any(|value| value == COOKIE_VALUE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
