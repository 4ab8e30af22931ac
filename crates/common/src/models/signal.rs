use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalCategory {
    /// Bullish, keep playing.
    Green,
    /// Bearish, avoid.
    Red,
    /// Caution after a spike, no directional call.
    Yellow,
    /// Not enough rounds to say anything.
    None,
    /// Nothing fired.
    Unknown,
}

impl SignalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalCategory::Green => "GREEN",
            SignalCategory::Red => "RED",
            SignalCategory::Yellow => "YELLOW",
            SignalCategory::None => "NONE",
            SignalCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named multi-round patterns, listed in evaluation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pattern {
    MeanReversion,
    YellowToGreen,
    GreenSpikeTrap,
    StableGreenTrap,
    RisingGreenTrend,
    ZigzagTrap,
    RedToGreenReversal,
    GreenStreak,
    RecentSpike,
}

/// Which rule produced a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalSource {
    Pattern(Pattern),
    EmaCrossover,
    InsufficientData,
    NoSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub description: &'static str,
    pub source: SignalSource,
}

impl Signal {
    pub const INSUFFICIENT_DATA: &'static str = "Insufficient data to predict";
    pub const NO_SIGNAL: &'static str = "No strong signal found";

    pub const fn new(
        category: SignalCategory,
        description: &'static str,
        source: SignalSource,
    ) -> Self {
        Self {
            category,
            description,
            source,
        }
    }

    pub const fn insufficient_data() -> Self {
        Self::new(
            SignalCategory::None,
            Self::INSUFFICIENT_DATA,
            SignalSource::InsufficientData,
        )
    }

    pub const fn no_signal() -> Self {
        Self::new(
            SignalCategory::Unknown,
            Self::NO_SIGNAL,
            SignalSource::NoSignal,
        )
    }

    pub fn pattern(&self) -> Option<Pattern> {
        match self.source {
            SignalSource::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.description)
    }
}
