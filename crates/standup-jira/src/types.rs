use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use standup_core::{Person, Ticket};

use crate::error::JiraError;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SearchRequest {
    pub jql: String,
    pub fields: &'static [&'static str],
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
}

#[derive(Debug, Deserialize)]
pub struct JiraFields {
    pub summary: String,
    pub status: JiraStatus,
    #[serde(default)]
    pub priority: Option<JiraPriority>,
    #[serde(default)]
    pub assignee: Option<JiraAssignee>,
    pub updated: String,
    #[serde(default)]
    pub parent: Option<JiraParent>,
}

#[derive(Debug, Deserialize)]
pub struct JiraStatus {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraPriority {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraAssignee {
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JiraParent {
    pub key: String,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

impl JiraIssue {
    /// Map the wire issue into the normalized ticket shape, attaching the
    /// browse link derived from the configured base URL.
    pub fn into_ticket(self, base_url: &str) -> Result<Ticket, JiraError> {
        let browse_url = format!("{}/browse/{}", base_url.trim_end_matches('/'), self.key);
        let updated = parse_updated(&self.fields.updated)
            .ok_or_else(|| JiraError::Parse(format!("bad 'updated' on {}", self.key)))?;

        Ok(Ticket {
            key: self.key,
            summary: self.fields.summary,
            status: self.fields.status.name,
            priority: self.fields.priority.map(|p| p.name),
            assignee: self.fields.assignee.map(Person::from),
            updated,
            parent_key: self.fields.parent.map(|p| p.key),
            browse_url,
        })
    }
}

impl From<JiraAssignee> for Person {
    fn from(assignee: JiraAssignee) -> Self {
        Person {
            id: assignee.account_id,
            display_name: assignee.display_name,
            email: assignee.email_address.unwrap_or_default(),
        }
    }
}

/// Jira emits offsets without a colon (`+0100`), which is not RFC 3339, so
/// try its native format first.
fn parse_updated(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_json(assignee: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "key": "PROJ-7",
            "fields": {
                "summary": "Fix login bug",
                "status": { "name": "In Progress" },
                "priority": { "name": "High" },
                "assignee": assignee,
                "updated": "2025-06-02T09:30:00.000+0100",
                "parent": { "key": "PROJ-1" }
            }
        })
    }

    #[test]
    fn maps_a_full_issue() {
        let issue: JiraIssue = serde_json::from_value(issue_json(serde_json::json!({
            "accountId": "u1",
            "displayName": "Alice",
            "emailAddress": "alice@example.com"
        })))
        .unwrap();

        let ticket = issue.into_ticket("https://demo.atlassian.net/").unwrap();
        assert_eq!(ticket.key, "PROJ-7");
        assert_eq!(ticket.status, "In Progress");
        assert_eq!(ticket.priority.as_deref(), Some("High"));
        assert_eq!(ticket.parent_key.as_deref(), Some("PROJ-1"));
        assert_eq!(ticket.browse_url, "https://demo.atlassian.net/browse/PROJ-7");
        let assignee = ticket.assignee.unwrap();
        assert_eq!(assignee.id, "u1");
        assert_eq!(assignee.email, "alice@example.com");
    }

    #[test]
    fn missing_email_becomes_empty_string() {
        let issue: JiraIssue = serde_json::from_value(issue_json(serde_json::json!({
            "accountId": "u1",
            "displayName": "Alice"
        })))
        .unwrap();
        let ticket = issue.into_ticket("https://demo.atlassian.net").unwrap();
        assert_eq!(ticket.assignee.unwrap().email, "");
    }

    #[test]
    fn null_assignee_and_priority_survive() {
        let issue: JiraIssue = serde_json::from_value(serde_json::json!({
            "key": "PROJ-8",
            "fields": {
                "summary": "Unowned chore",
                "status": { "name": "To Do" },
                "assignee": null,
                "priority": null,
                "updated": "2025-06-02T09:30:00.000+0000"
            }
        }))
        .unwrap();
        let ticket = issue.into_ticket("https://demo.atlassian.net").unwrap();
        assert!(ticket.assignee.is_none());
        assert!(ticket.priority.is_none());
        assert!(ticket.parent_key.is_none());
    }

    #[test]
    fn accepts_rfc3339_timestamps_too() {
        assert!(parse_updated("2025-06-02T09:30:00+01:00").is_some());
        assert!(parse_updated("not a date").is_none());
    }

    #[test]
    fn search_request_serializes_max_results_camel_case() {
        let req = SearchRequest {
            jql: "project = PROJ".into(),
            fields: &["summary"],
            max_results: 100,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["maxResults"], 100);
    }
}
