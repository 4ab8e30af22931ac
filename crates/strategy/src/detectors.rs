//! Fixed battery of multi-round pattern detectors.
//!
//! Detectors are evaluated in [`DETECTION_ORDER`] and the first match wins,
//! so the order doubles as a priority ranking. Every detector only looks at
//! the trailing rounds it needs and declines when the history is shorter
//! than its window.

use common::models::{Pattern, Signal, SignalCategory, SignalSource};

pub const DETECTION_ORDER: [Pattern; 9] = [
    Pattern::MeanReversion,
    Pattern::YellowToGreen,
    Pattern::GreenSpikeTrap,
    Pattern::StableGreenTrap,
    Pattern::RisingGreenTrend,
    Pattern::ZigzagTrap,
    Pattern::RedToGreenReversal,
    Pattern::GreenStreak,
    Pattern::RecentSpike,
];

pub const MEAN_REVERSION_BOUNCE: &str = "Mean-reversion bounce (low avg)";
pub const MEAN_REVERSION_PULLBACK: &str = "Mean-reversion pullback (high avg)";
pub const YELLOW_TO_GREEN: &str = "Yellow spike then low green (>=20x -> 2-3x)";
pub const GREEN_SPIKE_TRAP: &str = "Green to spike trap (2-2.5x -> >=5x)";
pub const STABLE_GREEN_TRAP: &str = "Stable green trap (2-5x close together)";
pub const RISING_GREEN_TREND: &str = "Rising green trend (3 up)";
pub const ZIGZAG_TRAP: &str = "Zigzag trap (H-L-H or L-H-L)";
pub const RED_TO_GREEN_REVERSAL: &str = "Red reversal (low -> high -> lowest)";
pub const GREEN_STREAK: &str = "4+ greens in last 5";
pub const RECENT_SPIKE: &str = "Recent spike (>=20x)";

pub trait Detector {
    /// Number of trailing rounds the detector inspects.
    fn window(&self) -> usize;

    fn detect(&self, history: &[f64]) -> Option<Signal>;
}

impl Detector for Pattern {
    fn window(&self) -> usize {
        match self {
            Pattern::YellowToGreen | Pattern::GreenSpikeTrap => 2,
            Pattern::StableGreenTrap
            | Pattern::RisingGreenTrend
            | Pattern::RedToGreenReversal
            | Pattern::RecentSpike => 3,
            Pattern::MeanReversion | Pattern::ZigzagTrap | Pattern::GreenStreak => 5,
        }
    }

    fn detect(&self, history: &[f64]) -> Option<Signal> {
        let tail = trailing(history, self.window())?;
        let (category, description) = match self {
            Pattern::MeanReversion => mean_reversion(tail)?,
            Pattern::YellowToGreen => {
                yellow_to_green(tail).then_some((SignalCategory::Red, YELLOW_TO_GREEN))?
            }
            Pattern::GreenSpikeTrap => {
                green_spike_trap(tail).then_some((SignalCategory::Red, GREEN_SPIKE_TRAP))?
            }
            Pattern::StableGreenTrap => {
                stable_green_trap(tail).then_some((SignalCategory::Red, STABLE_GREEN_TRAP))?
            }
            Pattern::RisingGreenTrend => {
                rising_green_trend(tail).then_some((SignalCategory::Red, RISING_GREEN_TREND))?
            }
            Pattern::ZigzagTrap => zigzag_trap(tail).then_some((SignalCategory::Red, ZIGZAG_TRAP))?,
            Pattern::RedToGreenReversal => red_to_green_reversal(tail)
                .then_some((SignalCategory::Green, RED_TO_GREEN_REVERSAL))?,
            Pattern::GreenStreak => {
                green_streak(tail).then_some((SignalCategory::Green, GREEN_STREAK))?
            }
            Pattern::RecentSpike => {
                recent_spike(tail).then_some((SignalCategory::Yellow, RECENT_SPIKE))?
            }
        };
        Some(Signal::new(
            category,
            description,
            SignalSource::Pattern(*self),
        ))
    }
}

/// Runs the battery in priority order and returns the first match.
pub fn detect_pattern(history: &[f64]) -> Option<Signal> {
    DETECTION_ORDER
        .iter()
        .find_map(|pattern| pattern.detect(history))
}

fn trailing(history: &[f64], window: usize) -> Option<&[f64]> {
    history
        .len()
        .checked_sub(window)
        .map(|start| &history[start..])
}

fn mean_reversion(tail: &[f64]) -> Option<(SignalCategory, &'static str)> {
    let avg = tail.iter().sum::<f64>() / tail.len() as f64;
    if avg <= 2.5 {
        Some((SignalCategory::Green, MEAN_REVERSION_BOUNCE))
    } else if avg >= 6.0 {
        Some((SignalCategory::Red, MEAN_REVERSION_PULLBACK))
    } else {
        None
    }
}

fn yellow_to_green(tail: &[f64]) -> bool {
    let (penult, last) = (tail[0], tail[1]);
    penult >= 20.0 && (2.0..3.0).contains(&last)
}

fn green_spike_trap(tail: &[f64]) -> bool {
    let (penult, last) = (tail[0], tail[1]);
    (2.0..=2.5).contains(&penult) && last >= 5.0
}

fn stable_green_trap(tail: &[f64]) -> bool {
    tail.iter().all(|v| (2.0..=5.0).contains(v))
        && tail.windows(2).all(|pair| (pair[0] - pair[1]).abs() <= 0.5)
}

fn rising_green_trend(tail: &[f64]) -> bool {
    let (x, y, z) = (tail[0], tail[1], tail[2]);
    x < y && y < z && x >= 2.0 && z < 10.0
}

// [2.5, 3) is neither high nor low.
fn is_zigzag_high(v: f64) -> bool {
    (3.0..10.0).contains(&v)
}

fn is_zigzag_low(v: f64) -> bool {
    (2.0..2.5).contains(&v)
}

fn zigzag_trap(tail: &[f64]) -> bool {
    tail.windows(3).any(|w| {
        let (a, b, c) = (w[0], w[1], w[2]);
        (is_zigzag_high(a) && is_zigzag_low(b) && is_zigzag_high(c))
            || (is_zigzag_low(a) && is_zigzag_high(b) && is_zigzag_low(c))
    })
}

fn red_to_green_reversal(tail: &[f64]) -> bool {
    let (a, b, c) = (tail[0], tail[1], tail[2]);
    tail.iter().all(|&v| v < 1.99) && a < b && c < a
}

fn green_streak(tail: &[f64]) -> bool {
    tail.iter().filter(|v| (2.0..10.0).contains(*v)).count() >= 4
}

fn recent_spike(tail: &[f64]) -> bool {
    tail.iter().any(|&v| v >= 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(pattern: Pattern, history: &[f64]) -> Option<SignalCategory> {
        pattern.detect(history).map(|s| s.category)
    }

    #[test]
    fn test_every_detector_declines_short_history() {
        for pattern in DETECTION_ORDER {
            let short = vec![25.0; pattern.window() - 1];
            assert_eq!(pattern.detect(&short), None, "{:?}", pattern);
        }
    }

    #[test]
    fn test_mean_reversion() {
        assert_eq!(
            fired(Pattern::MeanReversion, &[1.0, 1.0, 1.0, 1.0, 1.0]),
            Some(SignalCategory::Green)
        );
        // exactly 2.5 is still a bounce
        assert_eq!(
            fired(Pattern::MeanReversion, &[2.5, 2.5, 2.5, 2.5, 2.5]),
            Some(SignalCategory::Green)
        );
        assert_eq!(
            fired(Pattern::MeanReversion, &[6.0, 6.0, 6.0, 6.0, 6.0]),
            Some(SignalCategory::Red)
        );
        assert_eq!(fired(Pattern::MeanReversion, &[2.0, 3.0, 4.0, 5.0, 6.0]), None);
        // only the last five count
        assert_eq!(
            fired(Pattern::MeanReversion, &[100.0, 1.0, 1.2, 1.1, 1.3, 1.0]),
            Some(SignalCategory::Green)
        );
    }

    #[test]
    fn test_yellow_to_green_bounds() {
        assert!(Pattern::YellowToGreen.detect(&[20.0, 2.0]).is_some());
        assert!(Pattern::YellowToGreen.detect(&[35.0, 2.99]).is_some());
        assert!(Pattern::YellowToGreen.detect(&[35.0, 3.0]).is_none());
        assert!(Pattern::YellowToGreen.detect(&[19.99, 2.5]).is_none());
        assert!(Pattern::YellowToGreen.detect(&[35.0, 1.99]).is_none());
    }

    #[test]
    fn test_green_spike_trap_bounds() {
        assert!(Pattern::GreenSpikeTrap.detect(&[2.5, 5.0]).is_some());
        assert!(Pattern::GreenSpikeTrap.detect(&[2.0, 12.0]).is_some());
        assert!(Pattern::GreenSpikeTrap.detect(&[2.51, 5.0]).is_none());
        assert!(Pattern::GreenSpikeTrap.detect(&[2.2, 4.99]).is_none());
    }

    #[test]
    fn test_stable_green_trap() {
        assert!(Pattern::StableGreenTrap.detect(&[3.0, 3.5, 3.0]).is_some());
        assert!(Pattern::StableGreenTrap.detect(&[2.0, 2.25, 2.5]).is_some());
        assert!(Pattern::StableGreenTrap.detect(&[3.0, 3.75, 3.5]).is_none());
        assert!(Pattern::StableGreenTrap.detect(&[4.75, 5.25, 5.0]).is_none());
    }

    #[test]
    fn test_rising_green_trend() {
        assert!(Pattern::RisingGreenTrend.detect(&[5.0, 7.0, 9.0]).is_some());
        assert!(Pattern::RisingGreenTrend.detect(&[5.0, 7.0, 10.0]).is_none());
        assert!(Pattern::RisingGreenTrend.detect(&[1.9, 7.0, 9.0]).is_none());
        assert!(Pattern::RisingGreenTrend.detect(&[5.0, 5.0, 9.0]).is_none());
    }

    #[test]
    fn test_zigzag_trap() {
        // high-low-high in the last subwindow
        assert!(Pattern::ZigzagTrap.detect(&[1.0, 1.0, 4.0, 2.2, 6.0]).is_some());
        // low-high-low in the first subwindow
        assert!(Pattern::ZigzagTrap.detect(&[2.1, 3.0, 2.4, 1.0, 1.0]).is_some());
        // 2.7 sits in the unclassified gap
        assert!(Pattern::ZigzagTrap.detect(&[1.0, 1.0, 4.0, 2.7, 6.0]).is_none());
        assert!(Pattern::ZigzagTrap.detect(&[1.0, 1.0, 4.0, 2.2, 10.0]).is_none());
    }

    #[test]
    fn test_red_to_green_reversal() {
        assert_eq!(
            fired(Pattern::RedToGreenReversal, &[1.5, 1.8, 1.2]),
            Some(SignalCategory::Green)
        );
        assert!(Pattern::RedToGreenReversal.detect(&[1.5, 1.99, 1.2]).is_none());
        assert!(Pattern::RedToGreenReversal.detect(&[1.5, 1.8, 1.5]).is_none());
    }

    #[test]
    fn test_green_streak() {
        assert_eq!(
            fired(Pattern::GreenStreak, &[2.0, 9.0, 1.0, 4.0, 5.0]),
            Some(SignalCategory::Green)
        );
        assert!(Pattern::GreenStreak.detect(&[2.0, 10.0, 1.0, 4.0, 5.0]).is_none());
    }

    #[test]
    fn test_recent_spike() {
        assert_eq!(
            fired(Pattern::RecentSpike, &[20.0, 1.0, 1.5]),
            Some(SignalCategory::Yellow)
        );
        assert!(Pattern::RecentSpike.detect(&[20.0, 1.0, 1.5, 1.2]).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        // stable green trap and rising green trend both hold here
        let history = [2.0, 2.3, 2.6];
        assert!(Pattern::RisingGreenTrend.detect(&history).is_some());
        let signal = detect_pattern(&history).unwrap();
        assert_eq!(signal.pattern(), Some(Pattern::StableGreenTrap));
        assert_eq!(signal.description, STABLE_GREEN_TRAP);
    }

    #[test]
    fn test_mean_reversion_outranks_everything() {
        // a red-to-green reversal on the tail, but the average is low
        let history = [1.1, 1.3, 1.5, 1.8, 1.2];
        assert!(Pattern::RedToGreenReversal.detect(&history).is_some());
        let signal = detect_pattern(&history).unwrap();
        assert_eq!(signal.pattern(), Some(Pattern::MeanReversion));
        assert_eq!(signal.description, MEAN_REVERSION_BOUNCE);
    }
}
