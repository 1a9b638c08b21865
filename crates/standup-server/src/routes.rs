use axum::extract::State;
use axum::Json;
use standup_core::{Person, Ticket};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/issues — tickets in the project's open sprint(s).
pub async fn list_issues(State(app): State<AppState>) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = app.jira.fetch_sprint_tickets().await?;
    Ok(Json(tickets))
}

/// GET /api/users — people with at least one assigned sprint ticket.
pub async fn list_users(State(app): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let users = app.jira.fetch_assignable_users().await?;
    Ok(Json(users))
}

/// GET /api/sprint-url — the sprint board link, `null` when the tracker
/// is not configured.
pub async fn sprint_url(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "url": app.jira.sprint_board_url() }))
}

/// GET /api/health — liveness probe, exempt from the session gate.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
