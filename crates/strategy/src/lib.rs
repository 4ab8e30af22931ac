//! Signal detection over recent crash-round multipliers.
//!
//! [`SignalEngine`] is pure: every call works on the slice it is handed and
//! keeps no state between calls, so a single engine can be shared freely
//! across tasks.

pub mod config;
pub mod detectors;
pub mod error;
pub mod indicators;
pub mod services;

pub use config::EngineConfig;
pub use error::{ConfigError, IndicatorError};
pub use services::signal_engine::SignalEngine;
