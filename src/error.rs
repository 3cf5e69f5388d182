use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Edition {0} not found")]
    EditionNotFound(u32),

    #[error("Missing document: {0}")]
    MissingDocument(String),

    #[error("Champion table error: {0}")]
    ChampionTable(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Reasons a single match is left out of the aggregates.
///
/// These never reach the caller of the aggregator; they are logged and
/// counted in the output metadata.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("invalid duration '{0}'")]
    InvalidDuration(String),

    #[error("duration is {0}")]
    NonPositiveDuration(i64),

    #[error("no participants found")]
    NoParticipants,

    #[error("malformed match payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
