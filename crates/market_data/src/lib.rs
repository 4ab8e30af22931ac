pub mod error;
pub mod remote;
pub mod traits;

pub use error::FeedError;
pub use remote::{CrashPageClient, RetryPolicy};
pub use traits::RoundFeed;
