pub mod crash_page_client;
pub mod round_parser;

pub use crash_page_client::{CrashPageClient, RetryPolicy};
pub use round_parser::parse_rounds;

pub const DEFAULT_FEED_URL: &str = "https://bc.game/game/crash";
