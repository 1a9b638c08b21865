use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::person::Person;

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

/// A unit of tracked work, sourced wholesale from the tracker and immutable
/// for the life of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Tracker key, e.g. `PROJ-101`. Unique within a fetch result.
    pub key: String,
    pub summary: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Person>,
    pub updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    /// Direct link into the tracker's web UI.
    pub browse_url: String,
}

impl Ticket {
    pub fn is_assigned_to(&self, person_id: &str) -> bool {
        self.assignee.as_ref().is_some_and(|a| a.id == person_id)
    }
}

/// The subset of `tickets` assigned to `person_id`, preserving fetch order.
pub fn tickets_for<'a>(tickets: &'a [Ticket], person_id: &str) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| t.is_assigned_to(person_id))
        .collect()
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::TimeZone;

    /// Build a minimal ticket for state-machine and derivation tests.
    pub fn ticket(key: &str, assignee: Option<(&str, &str)>) -> Ticket {
        Ticket {
            key: key.to_string(),
            summary: format!("Summary for {key}"),
            status: "In Progress".to_string(),
            priority: None,
            assignee: assignee.map(|(id, name)| Person {
                id: id.to_string(),
                display_name: name.to_string(),
                email: format!("{id}@example.com"),
            }),
            updated: Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap(),
            parent_key: None,
            browse_url: format!("https://demo.atlassian.net/browse/{key}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
