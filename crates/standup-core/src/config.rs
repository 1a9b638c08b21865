use crate::error::{Result, StandupError};

pub const DEFAULT_PORT: u16 = 3001;

// ---------------------------------------------------------------------------
// JiraSettings
// ---------------------------------------------------------------------------

/// Credentials and coordinates for the tracker. Any of the four required
/// values being absent puts the adapter into mock-data mode; that is a
/// configuration, not an error.
#[derive(Debug, Clone, Default)]
pub struct JiraSettings {
    pub base_url: Option<String>,
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub project_key: Option<String>,
    pub board_id: Option<String>,
}

impl JiraSettings {
    /// True when all four values needed for live tracker calls are present.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
            && self.email.is_some()
            && self.api_token.is_some()
            && self.project_key.is_some()
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub jira: JiraSettings,
    /// Shared secret for the login endpoint. Absent → login returns 500.
    pub auth_passphrase: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup so tests never touch the
    /// process environment. Empty values count as unset.
    fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(StandupError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            jira: JiraSettings {
                base_url: var("JIRA_URL"),
                email: var("JIRA_EMAIL"),
                api_token: var("JIRA_API_TOKEN"),
                project_key: var("JIRA_PROJECT_KEY"),
                board_id: var("JIRA_BOARD_ID"),
            },
            auth_passphrase: var("AUTH_PASSPHRASE"),
            port,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
