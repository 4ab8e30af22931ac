use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use common::models::History;
use reqwest::{Client, header};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::FeedError;
use crate::remote::round_parser::parse_rounds;
use crate::traits::RoundFeed;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Stop retrying as soon as this many rounds are visible.
    pub min_rounds: usize,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            min_rounds: 8,
            delay: Duration::from_millis(1500),
        }
    }
}

pub struct CrashPageClient {
    client: Client,
    url: String,
    policy: RetryPolicy,
}

impl CrashPageClient {
    pub fn new(url: impl Into<String>, policy: RetryPolicy) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            policy,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_once(&self) -> Result<History, FeedError> {
        let resp = self
            .client
            .get(&self.url)
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        Ok(History::from_readings(parse_rounds(&body)?))
    }
}

#[async_trait]
impl RoundFeed for CrashPageClient {
    async fn latest_rounds(&self) -> Result<History, FeedError> {
        let history = fetch_with_retries(&self.policy, || self.fetch_once()).await?;
        info!(
            "Live crash data ({} rounds): {:?}",
            history.len(),
            history.tail(20).as_slice()
        );
        Ok(history)
    }
}

/// Calls `fetch` until it yields at least `policy.min_rounds` rounds or the
/// attempts run out.
///
/// A short but non-empty history from the latest successful attempt is still
/// returned once retries are exhausted. Only when nothing was ever seen does
/// the last error (or [`FeedError::NoRounds`]) surface.
pub async fn fetch_with_retries<F, Fut>(
    policy: &RetryPolicy,
    mut fetch: F,
) -> Result<History, FeedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<History, FeedError>>,
{
    let mut partial: Option<History> = None;
    let mut last_error = None;

    for attempt in 1..=policy.max_attempts {
        match fetch().await {
            Ok(history) if history.len() >= policy.min_rounds => {
                debug!("Fetched {} rounds on attempt {}", history.len(), attempt);
                return Ok(history);
            }
            Ok(history) => {
                warn!(
                    "Only {} rounds found, retrying ({}/{})",
                    history.len(),
                    attempt,
                    policy.max_attempts
                );
                partial = Some(history);
            }
            Err(e) => {
                warn!(
                    "Feed attempt {}/{} failed: {}",
                    attempt, policy.max_attempts, e
                );
                last_error = Some(e);
            }
        }

        if attempt < policy.max_attempts {
            sleep(policy.delay).await;
        }
    }

    match partial {
        Some(history) if !history.is_empty() => {
            warn!(
                "Could only fetch {} rounds after retries.",
                history.len()
            );
            Ok(history)
        }
        _ => Err(last_error.unwrap_or(FeedError::NoRounds)),
    }
}
