pub mod advisor_service;
pub mod render;
pub mod telegram_service;

#[cfg(test)]
pub(crate) mod mock_feed;
