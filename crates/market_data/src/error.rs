use thiserror::Error;

/// The round feed could not deliver a usable history.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to round feed failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("round feed answered with status {0}")]
    Status(u16),

    #[error("round feed returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("round feed returned no rounds")]
    NoRounds,
}
