use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("tracker request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("tracker responded with {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not parse tracker response: {0}")]
    Parse(String),
}
