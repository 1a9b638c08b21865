use chrono::TimeZone;
use chrono::Utc;
use standup_core::{Person, Ticket};

/// Fixed substitute data served when the tracker credentials are not
/// configured. Deterministic: repeated calls within a session (or across
/// sessions) return the same keys, assignees, and timestamps.
pub fn mock_tickets() -> Vec<Ticket> {
    let john = Person {
        id: "mock-1".to_string(),
        display_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    };
    let jane = Person {
        id: "mock-2".to_string(),
        display_name: "Jane Smith".to_string(),
        email: "jane@example.com".to_string(),
    };

    vec![
        Ticket {
            key: "DEMO-101".to_string(),
            summary: "Implement user authentication".to_string(),
            status: "In Progress".to_string(),
            priority: Some("High".to_string()),
            assignee: Some(john.clone()),
            updated: Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap(),
            parent_key: None,
            browse_url: "https://demo.atlassian.net/browse/DEMO-101".to_string(),
        },
        Ticket {
            key: "DEMO-102".to_string(),
            summary: "Fix navigation bug".to_string(),
            status: "To Do".to_string(),
            priority: None,
            assignee: Some(jane),
            updated: Utc.with_ymd_and_hms(2025, 6, 2, 8, 45, 0).unwrap(),
            parent_key: None,
            browse_url: "https://demo.atlassian.net/browse/DEMO-102".to_string(),
        },
        Ticket {
            key: "DEMO-103".to_string(),
            summary: "Refactor API client".to_string(),
            status: "Done".to_string(),
            priority: Some("Medium".to_string()),
            assignee: Some(john),
            updated: Utc.with_ymd_and_hms(2025, 6, 1, 16, 10, 0).unwrap(),
            parent_key: Some("DEMO-100".to_string()),
            browse_url: "https://demo.atlassian.net/browse/DEMO-103".to_string(),
        },
    ]
}
