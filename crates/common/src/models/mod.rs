pub mod cashout;
pub mod history;
pub mod signal;

pub use cashout::{CASHOUT_FLOOR, CashoutTarget};
pub use history::{History, RoundColor};
pub use signal::{Pattern, Signal, SignalCategory, SignalSource};
