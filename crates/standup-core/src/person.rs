use serde::{Deserialize, Serialize};

use crate::ticket::Ticket;

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A team member, derived at fetch time from ticket assignees. Immutable for
/// the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Stable tracker account id.
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub email: String,
}

/// Collect the distinct assignees across `tickets`, keyed by account id,
/// first occurrence wins. Tickets without an assignee are skipped.
pub fn derive_people(tickets: &[Ticket]) -> Vec<Person> {
    let mut seen: Vec<&str> = Vec::new();
    let mut people = Vec::new();
    for ticket in tickets {
        let Some(assignee) = &ticket.assignee else {
            continue;
        };
        if seen.contains(&assignee.id.as_str()) {
            continue;
        }
        seen.push(&assignee.id);
        people.push(assignee.clone());
    }
    people
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
