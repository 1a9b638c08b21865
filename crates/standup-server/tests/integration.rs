use axum::http::StatusCode;
use http_body_util::BodyExt;
use standup_core::config::JiraSettings;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Router over an unconfigured tracker (mock-data mode), no auth.
fn open_app() -> axum::Router {
    standup_server::build_router(JiraSettings::default(), None)
}

/// Router pointed at a mockito server standing in for Jira.
fn app_with_tracker(base_url: &str) -> axum::Router {
    let settings = JiraSettings {
        base_url: Some(base_url.to_string()),
        email: Some("bot@example.com".to_string()),
        api_token: Some("token".to_string()),
        project_key: Some("PROJ".to_string()),
        board_id: None,
    };
    standup_server::build_router(settings, None)
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a JSON body via `oneshot` and return the full
/// response parts for cookie inspection.
async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, headers, json)
}

// ---------------------------------------------------------------------------
// Read endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn issues_serve_the_mock_fixture_when_unconfigured() {
    let (status, json) = get(open_app(), "/api/issues").await;
    assert_eq!(status, StatusCode::OK);
    let issues = json.as_array().unwrap();
    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0]["key"], "DEMO-101");
    assert_eq!(
        issues[0]["browseUrl"],
        "https://demo.atlassian.net/browse/DEMO-101"
    );
    assert_eq!(issues[0]["assignee"]["displayName"], "John Doe");
}

#[tokio::test]
async fn users_are_derived_from_the_fixture_when_unconfigured() {
    let (status, json) = get(open_app(), "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["displayName"], "John Doe");
    assert_eq!(users[1]["displayName"], "Jane Smith");
}

#[tokio::test]
async fn issues_surface_tracker_failure_as_500() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/rest/api/3/search/jql")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let (status, json) = get(app_with_tracker(&server.url()), "/api/issues").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("503"));
}

// Both read endpoints fail hard on upstream errors; an outage must not be
// rendered as an empty team.
#[tokio::test]
async fn users_surface_tracker_failure_as_500() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/rest/api/3/search/jql")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let (status, json) = get(app_with_tracker(&server.url()), "/api/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn issues_map_a_live_tracker_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/rest/api/3/search/jql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "issues": [{
                    "key": "PROJ-9",
                    "fields": {
                        "summary": "Live ticket",
                        "status": { "name": "In Review" },
                        "assignee": {
                            "accountId": "u9",
                            "displayName": "Ada",
                            "emailAddress": "ada@example.com"
                        },
                        "updated": "2025-06-02T09:30:00.000+0000"
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let (status, json) = get(app_with_tracker(&server.url()), "/api/issues").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["key"], "PROJ-9");
    assert_eq!(json[0]["status"], "In Review");
}

#[tokio::test]
async fn sprint_url_is_null_when_unconfigured() {
    let (status, json) = get(open_app(), "/api/sprint-url").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["url"].is_null());
}

#[tokio::test]
async fn sprint_url_is_built_from_settings() {
    let (status, json) = get(
        app_with_tracker("https://demo.atlassian.net"),
        "/api/sprint-url",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["url"],
        "https://demo.atlassian.net/jira/software/projects/PROJ/boards"
    );
}

#[tokio::test]
async fn health_is_ok() {
    let (status, json) = get(open_app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

fn auth_app(passphrase: Option<&str>) -> axum::Router {
    standup_server::build_router(JiraSettings::default(), passphrase.map(String::from))
}

#[tokio::test]
async fn login_without_configured_secret_is_500() {
    let (status, _, json) = post_json(
        auth_app(None),
        "/api/auth/login",
        serde_json::json!({ "passphrase": "anything" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "authentication not configured");
}

#[tokio::test]
async fn login_with_wrong_passphrase_is_401() {
    let (status, headers, json) = post_json(
        auth_app(Some("sesame")),
        "/api/auth/login",
        serde_json::json!({ "passphrase": "open up" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "invalid passphrase");
    assert!(headers.get("set-cookie").is_none());
}

#[tokio::test]
async fn login_sets_a_thirty_day_session_cookie() {
    let (status, headers, json) = post_json(
        auth_app(Some("sesame")),
        "/api/auth/login",
        serde_json::json!({ "passphrase": "sesame" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let cookie = headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("standup_auth=authenticated"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=2592000"));
}

#[tokio::test]
async fn logout_expires_the_cookie() {
    let (status, headers, _) = post_json(
        auth_app(Some("sesame")),
        "/api/auth/logout",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cookie = headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("standup_auth="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn api_requires_session_cookie_when_passphrase_is_set() {
    let app = auth_app(Some("sesame"));

    let (status, json) = get(app.clone(), "/api/issues").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "unauthorized");

    let req = axum::http::Request::builder()
        .uri("/api/issues")
        .header("cookie", "standup_auth=authenticated")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_stays_reachable_behind_the_gate() {
    let (status, _) = get(auth_app(Some("sesame")), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
}
