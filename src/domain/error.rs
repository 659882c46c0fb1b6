use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("config: {0}")]
    Config(String),
}

/// Failure raised by a reference lookup collaborator. Never escapes the
/// resolver; it is rendered as an `[Error] <id>` placeholder.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("lookup unavailable: {0}")]
    Unavailable(String),

    #[error("lookup rejected {collection}/{id}: {reason}")]
    Rejected {
        collection: String,
        id: String,
        reason: String,
    },
}
