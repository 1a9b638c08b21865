use std::sync::Arc;

use standup_core::config::JiraSettings;
use standup_jira::JiraClient;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub jira: Arc<JiraClient>,
    /// Shared secret for the login endpoint; `None` disables both login
    /// and the session gate.
    pub passphrase: Option<String>,
}

impl AppState {
    pub fn new(settings: JiraSettings, passphrase: Option<String>) -> Self {
        Self {
            jira: Arc::new(JiraClient::new(settings)),
            passphrase,
        }
    }
}
