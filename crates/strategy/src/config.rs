use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_EMA_SHORT: usize = 3;
pub const DEFAULT_EMA_LONG: usize = 6;
pub const DEFAULT_CASHOUT_WINDOW: usize = 6;
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Tunables for the EMA fallback and the cash-out target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub ema_short_period: usize,
    pub ema_long_period: usize,
    pub cashout_window: usize,
    pub sigma_multiplier: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ema_short_period: DEFAULT_EMA_SHORT,
            ema_long_period: DEFAULT_EMA_LONG,
            cashout_window: DEFAULT_CASHOUT_WINDOW,
            sigma_multiplier: DEFAULT_SIGMA,
        }
    }
}

impl EngineConfig {
    /// Reads `SIGNAL_EMA_SHORT`, `SIGNAL_EMA_LONG`, `CASHOUT_WINDOW` and
    /// `CASHOUT_SIGMA`, falling back to the defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            ema_short_period: parse_or(&lookup, "SIGNAL_EMA_SHORT", DEFAULT_EMA_SHORT)?,
            ema_long_period: parse_or(&lookup, "SIGNAL_EMA_LONG", DEFAULT_EMA_LONG)?,
            cashout_window: parse_or(&lookup, "CASHOUT_WINDOW", DEFAULT_CASHOUT_WINDOW)?,
            sigma_multiplier: parse_or(&lookup, "CASHOUT_SIGMA", DEFAULT_SIGMA)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ema_short_period == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "ema_short_period",
            });
        }
        if self.ema_long_period == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "ema_long_period",
            });
        }
        if self.cashout_window == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "cashout_window",
            });
        }
        if !self.sigma_multiplier.is_finite() || self.sigma_multiplier < 0.0 {
            return Err(ConfigError::InvalidSigma(self.sigma_multiplier));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Parse { key, value: raw }),
        None => Ok(default),
    }
}
