use std::env;
use std::str::FromStr;
use std::time::Duration;

use market_data::RetryPolicy;
use market_data::remote::DEFAULT_FEED_URL;
use strategy::{ConfigError, EngineConfig};
use thiserror::Error;

pub const DEFAULT_HISTORY_LEN: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum BotConfigError {
    #[error("{0} not set in .env")]
    Missing(&'static str),

    #[error("{key}={value:?} is not valid")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Engine(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram_token: String,
    pub feed_url: String,
    /// Rounds handed to the engine per command.
    pub history_len: usize,
    pub retry: RetryPolicy,
    pub engine: EngineConfig,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, BotConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telegram_token = lookup("TELEGRAM_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(BotConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;

        let feed_url = lookup("CRASH_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        let history_len = positive_or(&lookup, "HISTORY_LEN", DEFAULT_HISTORY_LEN)?;

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: positive_or(&lookup, "FEED_MAX_ATTEMPTS", defaults.max_attempts)?,
            min_rounds: positive_or(&lookup, "FEED_MIN_ROUNDS", defaults.min_rounds)?,
            delay: Duration::from_millis(parse_or(
                &lookup,
                "FEED_RETRY_DELAY_MS",
                defaults.delay.as_millis() as u64,
            )?),
        };

        let engine = EngineConfig::from_lookup(&lookup)?;

        Ok(Self {
            telegram_token,
            feed_url,
            history_len,
            retry,
            engine,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, BotConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| BotConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn positive_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, BotConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default + ToString,
{
    let value = parse_or(lookup, key, default)?;
    if value <= T::default() {
        return Err(BotConfigError::Invalid {
            key,
            value: value.to_string(),
        });
    }
    Ok(value)
}
