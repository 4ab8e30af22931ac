//! Chat text for each bot reply. Markers and wording live here only; the
//! engine never sees them.

use common::models::{CashoutTarget, History, RoundColor, Signal, SignalCategory};

pub const FETCH_FAILED: &str = "❌ Could not fetch data.";

pub const WELCOME: &str = "👋 Welcome to the Crash Signal bot!\n\
    Available commands:\n\
    /predict – Current trend prediction\n\
    /history – Last crash results\n\
    /suggest – Betting suggestion\n\
    /cashout – Recommended cash-out multiplier";

pub fn category_marker(category: SignalCategory) -> &'static str {
    match category {
        SignalCategory::Green => "🟢",
        SignalCategory::Red => "🔴",
        SignalCategory::Yellow => "🟡",
        SignalCategory::None | SignalCategory::Unknown => "⚠️",
    }
}

pub fn round_marker(color: RoundColor) -> &'static str {
    match color {
        RoundColor::Red => "🔴",
        RoundColor::Green => "🟢",
        RoundColor::Yellow => "🟡",
    }
}

pub fn render_signal(signal: &Signal) -> String {
    let marker = category_marker(signal.category);
    match signal.category {
        SignalCategory::None | SignalCategory::Unknown => {
            format!("{} {}", marker, signal.description)
        }
        _ => format!("{} {}: {}", marker, signal.category, signal.description),
    }
}

pub fn render_prediction(signal: &Signal) -> String {
    format!("📈 Prediction: {}", render_signal(signal))
}

pub fn render_history(history: &History) -> String {
    let lines: Vec<String> = history
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            format!(
                "{}. {}x {}",
                i + 1,
                value,
                round_marker(RoundColor::classify(value))
            )
        })
        .collect();

    format!("🕹️ Last {} Crashes:\n{}", history.len(), lines.join("\n"))
}

pub fn suggestion(category: SignalCategory) -> &'static str {
    match category {
        SignalCategory::Red => "🔻 Bet low or skip next round.",
        SignalCategory::Green => "🟢 Medium bet next round.",
        SignalCategory::Yellow => "⚠️ Skip next 2 rounds.",
        SignalCategory::None | SignalCategory::Unknown => "🤔 No clear pattern, wait.",
    }
}

pub fn render_suggestion(signal: &Signal) -> String {
    format!("🎯 {}", suggestion(signal.category))
}

pub fn render_cashout(target: &CashoutTarget) -> String {
    format!(
        "🏁 Cash-out guide based on last {} rounds:\nRecommended: {:.2}×",
        target.window(),
        target.value()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{Pattern, SignalSource};

    #[test]
    fn test_render_directional_prediction() {
        let signal = Signal::new(
            SignalCategory::Red,
            "Rising green trend (3 up)",
            SignalSource::Pattern(Pattern::RisingGreenTrend),
        );
        assert_eq!(
            render_prediction(&signal),
            "📈 Prediction: 🔴 RED: Rising green trend (3 up)"
        );
    }

    #[test]
    fn test_render_non_directional_prediction() {
        assert_eq!(
            render_prediction(&Signal::insufficient_data()),
            "📈 Prediction: ⚠️ Insufficient data to predict"
        );
        assert_eq!(
            render_signal(&Signal::no_signal()),
            "⚠️ No strong signal found"
        );
    }

    #[test]
    fn test_render_history() {
        let history = History::from_readings([1.5, 2.0, 14.25]);
        assert_eq!(
            render_history(&history),
            "🕹️ Last 3 Crashes:\n1. 1.5x 🔴\n2. 2x 🟢\n3. 14.25x 🟡"
        );
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggestion(SignalCategory::Red), "🔻 Bet low or skip next round.");
        assert_eq!(suggestion(SignalCategory::Green), "🟢 Medium bet next round.");
        assert_eq!(suggestion(SignalCategory::Yellow), "⚠️ Skip next 2 rounds.");
        assert_eq!(suggestion(SignalCategory::Unknown), "🤔 No clear pattern, wait.");
        assert_eq!(suggestion(SignalCategory::None), "🤔 No clear pattern, wait.");
    }

    #[test]
    fn test_render_cashout() {
        let target = CashoutTarget::new(2.5, 6);
        assert_eq!(
            render_cashout(&target),
            "🏁 Cash-out guide based on last 6 rounds:\nRecommended: 2.50×"
        );
    }
}
