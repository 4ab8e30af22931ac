use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{debug, info};

use common::logger;
use market_data::CrashPageClient;
use strategy::SignalEngine;

use crate::config::BotConfig;
use crate::services::advisor_service::AdvisorService;
use crate::services::telegram_service::TelegramService;

mod config;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();
    debug!("System starting up...");

    let config = BotConfig::from_env()?;

    let feed = CrashPageClient::new(config.feed_url.clone(), config.retry)?;
    info!(
        "Reading rounds from {} (keeping last {})",
        feed.url(),
        config.history_len
    );

    let engine = SignalEngine::new(config.engine)?;
    debug!("Engine configuration: {:?}", engine.config());

    let advisor = Arc::new(AdvisorService::new(
        Arc::new(feed),
        engine,
        config.history_len,
    ));

    TelegramService::new(&config.telegram_token, advisor)
        .start()
        .await;

    Ok(())
}
