use std::sync::Arc;

use common::models::{CashoutTarget, History, Signal};
use market_data::{FeedError, RoundFeed};
use strategy::SignalEngine;
use tracing::info;

/// Pulls a fresh snapshot from the feed for every request and runs the
/// engine over its most recent `history_len` rounds.
pub struct AdvisorService {
    feed: Arc<dyn RoundFeed>,
    engine: SignalEngine,
    history_len: usize,
}

impl AdvisorService {
    pub fn new(feed: Arc<dyn RoundFeed>, engine: SignalEngine, history_len: usize) -> Self {
        Self {
            feed,
            engine,
            history_len,
        }
    }

    pub async fn recent_rounds(&self) -> Result<History, FeedError> {
        let history = self.feed.latest_rounds().await?;
        if history.is_empty() {
            return Err(FeedError::NoRounds);
        }
        Ok(history.tail(self.history_len))
    }

    pub async fn predict(&self) -> Result<Signal, FeedError> {
        let rounds = self.recent_rounds().await?;
        let signal = self.engine.predict(rounds.as_slice());
        info!("Prediction over {:?}: {}", rounds.as_slice(), signal);
        Ok(signal)
    }

    pub async fn cashout(&self) -> Result<CashoutTarget, FeedError> {
        let rounds = self.recent_rounds().await?;
        let target = self.engine.cashout_target(rounds.as_slice());
        info!(
            "Cash-out target over last {} rounds: {:.2}",
            target.window(),
            target.value()
        );
        Ok(target)
    }
}
