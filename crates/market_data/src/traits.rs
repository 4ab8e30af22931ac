use async_trait::async_trait;
use common::models::History;

use crate::error::FeedError;

/// Source of the most recent crash rounds, oldest first.
#[async_trait]
pub trait RoundFeed: Send + Sync {
    /// Never returns an empty history; an empty feed is reported as
    /// [`FeedError::NoRounds`].
    async fn latest_rounds(&self) -> Result<History, FeedError>;
}
