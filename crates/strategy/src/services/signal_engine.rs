use std::cmp::Ordering;

use common::models::{CashoutTarget, Signal, SignalCategory, SignalSource};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::detectors::detect_pattern;
use crate::error::{ConfigError, IndicatorError};
use crate::indicators::{log_lower_band, seeded_ema};

/// Fewest rounds any prediction is attempted on.
pub const MIN_HISTORY: usize = 2;

pub const EMA_BULLISH: &str = "EMA bullish crossover (short > long)";
pub const EMA_BEARISH: &str = "EMA bearish crossover (short < long)";

#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pattern battery first, EMA crossover second, `UNKNOWN` last.
    pub fn predict(&self, history: &[f64]) -> Signal {
        if history.len() < MIN_HISTORY {
            debug!("Only {} rounds, not enough to predict", history.len());
            return Signal::insufficient_data();
        }

        if let Some(signal) = detect_pattern(history) {
            debug!("Pattern {:?} matched: {}", signal.source, signal);
            return signal;
        }

        if let Some(signal) = self.ema_crossover(history) {
            debug!("No pattern matched, falling back to {}", signal);
            return signal;
        }

        Signal::no_signal()
    }

    /// Compares a short and a long EMA over the trailing rounds. Both periods
    /// are clamped to the history length.
    pub fn ema_crossover(&self, history: &[f64]) -> Option<Signal> {
        let n = history.len();
        if n < MIN_HISTORY {
            return None;
        }

        let short_period = self.config.ema_short_period.min(n);
        let long_period = self.config.ema_long_period.min(n);

        let (short, long) = match (
            trailing_ema(history, short_period),
            trailing_ema(history, long_period),
        ) {
            (Ok(short), Ok(long)) => (short, long),
            (Err(e), _) | (_, Err(e)) => {
                warn!("EMA crossover skipped: {}", e);
                return None;
            }
        };

        debug!(
            "EMA({})={:.4} EMA({})={:.4}",
            short_period, short, long_period, long
        );

        let (category, description) = match short.partial_cmp(&long)? {
            Ordering::Greater => (SignalCategory::Green, EMA_BULLISH),
            Ordering::Less => (SignalCategory::Red, EMA_BEARISH),
            Ordering::Equal => return None,
        };
        Some(Signal::new(
            category,
            description,
            SignalSource::EmaCrossover,
        ))
    }

    /// Volatility-adjusted exit multiplier: one `sigma` below the log-mean of
    /// the trailing window, never below the floor.
    pub fn cashout_target(&self, history: &[f64]) -> CashoutTarget {
        let n = history.len();
        let window = self.config.cashout_window.min(n);
        if window < MIN_HISTORY {
            return CashoutTarget::floor(window);
        }

        match log_lower_band(&history[n - window..], self.config.sigma_multiplier) {
            Ok(lower) => {
                let target = CashoutTarget::new(lower.exp(), window);
                debug!(
                    "Cash-out over {} rounds: raw={:.4} target={:.2}",
                    window,
                    lower.exp(),
                    target.value()
                );
                target
            }
            Err(e) => {
                warn!("Cash-out band failed, using floor: {}", e);
                CashoutTarget::floor(window)
            }
        }
    }
}

/// EMA over the last `period` values, seeded over that same slice.
fn trailing_ema(history: &[f64], period: usize) -> Result<f64, IndicatorError> {
    let slice = &history[history.len() - period..];
    // a slice of exactly `period` values always completes the seed
    Ok(seeded_ema(slice, period)?.unwrap_or_default())
}
