use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be at least 1")]
    ZeroPeriod { name: &'static str },

    #[error("sigma multiplier must be finite and non-negative, got {0}")]
    InvalidSigma(f64),

    #[error("{key}={value:?} is not a valid number")]
    Parse { key: &'static str, value: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    #[error("indicator rejected period {period}: {reason}")]
    InvalidPeriod { period: usize, reason: String },
}
