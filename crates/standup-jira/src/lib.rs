//! `standup-jira` — the issue-tracker adapter.
//!
//! Wraps the Jira Cloud REST API behind three operations:
//!
//! ```text
//! JiraSettings (from env)
//!     │
//!     ▼
//! JiraClient::fetch_sprint_tickets   ← JQL search over open sprints,
//!     │                                normalized to standup_core::Ticket;
//!     │                                deterministic mock fixture when the
//!     │                                credentials are not configured
//!     ▼
//! JiraClient::fetch_assignable_users ← Person set derived strictly from
//!     │                                ticket assignees
//!     ▼
//! JiraClient::sprint_board_url       ← pure URL construction, no network
//! ```
//!
//! Upstream failures always surface as `Err(JiraError)`; missing
//! configuration never does.

pub mod client;
pub mod error;
pub mod mock;
mod types;

pub use client::JiraClient;
pub use error::JiraError;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, JiraError>;
