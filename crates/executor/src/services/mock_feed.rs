use async_trait::async_trait;
use common::models::History;
use market_data::{FeedError, RoundFeed};
use mockall::mock;

mock! {
    pub Feed {}

    #[async_trait]
    impl RoundFeed for Feed {
        async fn latest_rounds(&self) -> Result<History, FeedError>;
    }
}

pub fn feed_with(values: &'static [f64]) -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_latest_rounds()
        .returning(move || Ok(History::from_readings(values.iter().copied())));
    feed
}

pub fn failing_feed() -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_latest_rounds()
        .returning(|| Err(FeedError::Status(503)));
    feed
}
