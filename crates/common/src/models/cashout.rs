use serde::Serialize;

/// Lowest multiplier ever recommended as an exit point.
pub const CASHOUT_FLOOR: f64 = 1.10;

/// Recommended exit multiplier, already clamped and rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashoutTarget {
    value: f64,
    window: usize,
}

impl CashoutTarget {
    /// Clamps `raw` to [`CASHOUT_FLOOR`] and rounds half-up to cents.
    pub fn new(raw: f64, window: usize) -> Self {
        let safe = raw.max(CASHOUT_FLOOR);
        Self {
            value: (safe * 100.0).round() / 100.0,
            window,
        }
    }

    pub fn floor(window: usize) -> Self {
        Self::new(CASHOUT_FLOOR, window)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of rounds the target was derived from.
    pub fn window(&self) -> usize {
        self.window
    }
}
