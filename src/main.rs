//! FuriaBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::{CallbackQuery, Update}};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use FuriaBot::{
    config::Settings,
    utils::logging,
    content::ContentStore,
    state::AppContext,
    handlers::{Command, handle_command, handle_message, handle_callback_query},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the token may come from the real environment
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", FuriaBot::info());

    // Load content once; failures degrade to empty sections
    info!("Loading team content...");
    let content = ContentStore::new(&settings.content.path).load().await;
    if content.is_empty() {
        warn!(path = %settings.content.path, "No content available, every menu entry will report it as unavailable");
    }

    let bot = Bot::new(&settings.bot.token);
    let ctx = Arc::new(AppContext::new(settings, content));

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("FuriaBot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands)
            )
            .branch(
                // Handle menu labels and any other text
                dptree::endpoint(handle_messages)
            )
        )
        .branch(
            // Handle quiz answer buttons
            Update::filter_callback_query()
                .endpoint(handle_callbacks)
        )
}

/// Handle bot commands
async fn handle_commands(bot: Bot, msg: Message, cmd: Command, ctx: Arc<AppContext>) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, ctx).await {
        error!(error = %e, severity = %e.severity(), recoverable = e.is_recoverable(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, ctx).await {
        error!(error = %e, severity = %e.severity(), recoverable = e.is_recoverable(), "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(bot: Bot, query: CallbackQuery, ctx: Arc<AppContext>) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    if let Err(e) = handle_callback_query(bot, query, ctx).await {
        error!(user_id = user_id, error = %e, severity = %e.severity(), "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
