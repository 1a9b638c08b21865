use base64::prelude::{Engine as _, BASE64_STANDARD};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use standup_core::config::JiraSettings;
use standup_core::person::derive_people;
use standup_core::{Person, Ticket};

use crate::error::JiraError;
use crate::mock;
use crate::types::{SearchRequest, SearchResponse};
use crate::Result;

/// Issues returned per sprint query. The standup view never pages.
const MAX_RESULTS: u32 = 100;

/// Fields requested from the tracker, and nothing else.
const FIELDS: &[&str] = &["summary", "status", "assignee", "updated", "priority", "parent"];

// ---------------------------------------------------------------------------
// JiraClient
// ---------------------------------------------------------------------------

pub struct JiraClient {
    http: Client,
    settings: JiraSettings,
}

impl JiraClient {
    pub fn new(settings: JiraSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    /// True when the adapter will serve the fixed mock data instead of
    /// calling the tracker.
    pub fn is_mock(&self) -> bool {
        !self.settings.is_configured()
    }

    /// Tickets in the project's open sprint(s), most recently updated
    /// first, capped at [`MAX_RESULTS`].
    ///
    /// Missing credentials are a configuration, not an error: the fixed
    /// mock fixture is returned. Any upstream failure is an `Err` — an
    /// outage must never masquerade as an empty sprint.
    pub async fn fetch_sprint_tickets(&self) -> Result<Vec<Ticket>> {
        let (Some(base_url), Some(email), Some(token), Some(project_key)) = (
            self.settings.base_url.as_deref(),
            self.settings.email.as_deref(),
            self.settings.api_token.as_deref(),
            self.settings.project_key.as_deref(),
        ) else {
            tracing::info!("tracker credentials not configured, serving mock data");
            return Ok(mock::mock_tickets());
        };

        let jql =
            format!("project = {project_key} AND sprint in openSprints() ORDER BY updated DESC");
        tracing::debug!(%jql, "querying tracker");

        let request = SearchRequest {
            jql,
            fields: FIELDS,
            max_results: MAX_RESULTS,
        };

        let response = self
            .http
            .post(Self::search_endpoint(base_url))
            .header(AUTHORIZATION, Self::auth_header(email, token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(JiraError::Api { status, body });
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|err| JiraError::Parse(err.to_string()))?;

        tracing::debug!(count = payload.issues.len(), "tracker returned issues");

        payload
            .issues
            .into_iter()
            .map(|issue| issue.into_ticket(base_url))
            .collect()
    }

    /// The people eligible to speak: distinct assignees across the open
    /// sprint's tickets, first occurrence wins. Someone assignable in the
    /// tracker but holding no sprint ticket is excluded by design.
    pub async fn fetch_assignable_users(&self) -> Result<Vec<Person>> {
        let tickets = self.fetch_sprint_tickets().await?;
        Ok(derive_people(&tickets))
    }

    /// The sprint board link, or `None` when base URL or project key is
    /// not configured. Pure; never touches the network.
    pub fn sprint_board_url(&self) -> Option<String> {
        let base_url = self.settings.base_url.as_deref()?.trim_end_matches('/');
        let project_key = self.settings.project_key.as_deref()?;
        Some(match self.settings.board_id.as_deref() {
            Some(board_id) => {
                format!("{base_url}/jira/software/c/projects/{project_key}/boards/{board_id}")
            }
            None => format!("{base_url}/jira/software/projects/{project_key}/boards"),
        })
    }

    fn search_endpoint(base_url: &str) -> String {
        format!("{}/rest/api/3/search/jql", base_url.trim_end_matches('/'))
    }

    fn auth_header(email: &str, token: &str) -> String {
        let credentials = format!("{email}:{token}");
        format!("Basic {}", BASE64_STANDARD.encode(credentials))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
