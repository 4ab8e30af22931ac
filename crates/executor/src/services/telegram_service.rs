use std::sync::Arc;

use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use crate::services::advisor_service::AdvisorService;
use crate::services::render::{
    FETCH_FAILED, WELCOME, render_cashout, render_history, render_prediction, render_suggestion,
};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "welcome message.")]
    Start,
    #[command(description = "show this text.")]
    Help,
    #[command(description = "current trend prediction.")]
    Predict,
    #[command(description = "last crash results.")]
    History,
    #[command(description = "betting suggestion.")]
    Suggest,
    #[command(description = "recommended cash-out multiplier.")]
    Cashout,
}

pub struct TelegramService {
    bot: Bot,
    advisor: Arc<AdvisorService>,
}

impl TelegramService {
    pub fn new(token: &str, advisor: Arc<AdvisorService>) -> Self {
        Self {
            bot: Bot::new(token),
            advisor,
        }
    }

    pub async fn start(self) {
        info!("Starting Telegram command service");

        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register bot commands: {}", e);
        }

        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(answer);

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.advisor])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram command service stopped.");
    }
}

async fn answer(
    bot: Bot,
    msg: Message,
    cmd: Command,
    advisor: Arc<AdvisorService>,
) -> ResponseResult<()> {
    info!("Command {:?} from chat {}", cmd, msg.chat.id);
    let text = reply(&advisor, cmd).await;

    // Send message and log error if it fails, but don't crash
    if let Err(e) = bot.send_message(msg.chat.id, text).await {
        error!("Failed to send Telegram message: {}", e);
    }
    Ok(())
}

/// Text answer for `cmd`. Feed failures become a short apology and the
/// engine is not consulted.
pub async fn reply(advisor: &AdvisorService, cmd: Command) -> String {
    let result = match cmd {
        Command::Start => return WELCOME.to_string(),
        Command::Help => return Command::descriptions().to_string(),
        Command::Predict => advisor.predict().await.map(|s| render_prediction(&s)),
        Command::History => advisor.recent_rounds().await.map(|h| render_history(&h)),
        Command::Suggest => advisor.predict().await.map(|s| render_suggestion(&s)),
        Command::Cashout => advisor.cashout().await.map(|t| render_cashout(&t)),
    };

    result.unwrap_or_else(|e| {
        warn!("Round feed unavailable: {}", e);
        FETCH_FAILED.to_string()
    })
}
