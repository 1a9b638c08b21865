use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandupError {
    #[error("invalid port '{0}': must be a number between 1 and 65535")]
    InvalidPort(String),
}

pub type Result<T> = std::result::Result<T, StandupError>;
