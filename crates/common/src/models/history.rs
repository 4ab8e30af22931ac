use serde::Serialize;

/// Ordered round multipliers, oldest first.
///
/// Built through [`History::from_readings`], which guarantees every value is
/// finite and positive and that no two adjacent readings are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History(Vec<f64>);

impl History {
    pub fn from_readings<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut rounds: Vec<f64> = Vec::new();
        for value in readings {
            if !value.is_finite() || value <= 0.0 {
                continue;
            }
            if rounds.last() == Some(&value) {
                continue;
            }
            rounds.push(value);
        }
        Self(rounds)
    }

    /// The most recent `n` rounds (or all of them when fewer are known).
    pub fn tail(&self, n: usize) -> Self {
        let start = self.0.len().saturating_sub(n);
        Self(self.0[start..].to_vec())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

impl AsRef<[f64]> for History {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Coarse bucket a single round falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundColor {
    /// Crashed at or below 1.99x.
    Red,
    Green,
    /// 10x and above.
    Yellow,
}

impl RoundColor {
    pub fn classify(multiplier: f64) -> Self {
        if multiplier >= 10.0 {
            RoundColor::Yellow
        } else if multiplier <= 1.99 {
            RoundColor::Red
        } else {
            RoundColor::Green
        }
    }
}
