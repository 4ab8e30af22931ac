use ta::Next;
use ta::indicators::{SimpleMovingAverage, StandardDeviation};

use crate::error::IndicatorError;

fn invalid_period(period: usize, err: impl std::fmt::Debug) -> IndicatorError {
    IndicatorError::InvalidPeriod {
        period,
        reason: format!("{:?}", err),
    }
}

/// EMA seeded with the simple average of its first `period` inputs.
///
/// Until `period` values have been seen the output is the running simple
/// average; afterwards each input is blended in with `k = 2 / (period + 1)`.
#[derive(Debug, Clone)]
pub struct SeededEma {
    period: usize,
    k: f64,
    seed: SimpleMovingAverage,
    seen: usize,
    current: f64,
}

impl SeededEma {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let seed = SimpleMovingAverage::new(period).map_err(|e| invalid_period(period, e))?;
        Ok(Self {
            period,
            k: 2.0 / (period as f64 + 1.0),
            seed,
            seen: 0,
            current: 0.0,
        })
    }

    pub fn is_seeded(&self) -> bool {
        self.seen >= self.period
    }
}

impl Next<f64> for SeededEma {
    type Output = f64;

    fn next(&mut self, input: f64) -> f64 {
        if self.is_seeded() {
            self.current = self.k * input + (1.0 - self.k) * self.current;
        } else {
            self.seen += 1;
            self.current = self.seed.next(input);
        }
        self.current
    }
}

/// EMA of the whole of `data`, seeded over its first `period` values.
///
/// Returns `None` when `data` is too short to complete the seed.
pub fn seeded_ema(data: &[f64], period: usize) -> Result<Option<f64>, IndicatorError> {
    let mut ema = SeededEma::new(period)?;
    let mut last = 0.0;
    for &value in data {
        last = ema.next(value);
    }
    Ok(ema.is_seeded().then_some(last))
}

/// Lower volatility band of `values` in log space: `mean - sigma * std`
/// of `ln(value)`, using the population standard deviation.
pub fn log_lower_band(values: &[f64], sigma: f64) -> Result<f64, IndicatorError> {
    let period = values.len();
    let mut mean = SimpleMovingAverage::new(period).map_err(|e| invalid_period(period, e))?;
    let mut std_dev = StandardDeviation::new(period).map_err(|e| invalid_period(period, e))?;

    let (mut mu, mut sd) = (0.0, 0.0);
    for value in values {
        let log = value.ln();
        mu = mean.next(log);
        sd = std_dev.next(log);
    }

    Ok(mu - sigma * sd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_seed_equals_simple_average() {
        let ema = seeded_ema(&[1.0, 2.0, 6.0], 3).unwrap();
        assert!((ema.unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_smooths_after_seed() {
        // seed = 2.0, k = 0.5 -> 0.5 * 9 + 0.5 * 2 = 5.5
        let ema = seeded_ema(&[1.0, 2.0, 3.0, 9.0], 3).unwrap();
        assert!((ema.unwrap() - 5.5).abs() < EPS);
    }

    #[test]
    fn test_short_data_is_none() {
        assert_eq!(seeded_ema(&[1.0, 2.0], 3).unwrap(), None);
        assert_eq!(seeded_ema(&[], 1).unwrap(), None);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            SeededEma::new(0),
            Err(IndicatorError::InvalidPeriod { period: 0, .. })
        ));
        assert!(log_lower_band(&[], 1.0).is_err());
    }

    #[test]
    fn test_log_band_flat_series() {
        let e = std::f64::consts::E;
        let band = log_lower_band(&[e, e, e], 1.0).unwrap();
        assert!((band - 1.0).abs() < EPS);
    }

    #[test]
    fn test_log_band_population_std() {
        // ln values: 0 and 2 -> mean 1, population std 1
        let e2 = std::f64::consts::E.powi(2);
        let band = log_lower_band(&[1.0, e2], 1.0).unwrap();
        assert!(band.abs() < 1e-6);

        let wide = log_lower_band(&[1.0, e2], 2.0).unwrap();
        assert!((wide + 1.0).abs() < 1e-6);
    }
}
