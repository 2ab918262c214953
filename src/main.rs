use cardbot::commands::{self, Data};
use cardbot::config::Config;
use cardbot::error::BotError;
use cardbot::handlers::{handle_event, on_error, pre_command};
use cardbot::repository::open_store;
use cardbot::services::{Localization, SettingsService, StaticAdminList, UserService};
use dotenvy::dotenv;
use serenity::all::GatewayIntents;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting card bot...");

    let config = Config::from_env()?;

    let localization = Arc::new(Localization::builtin(&config.default_language)?);
    info!("[OK] Localization ready (default: {})", config.default_language);

    let store = open_store(&config.users_file).await?;
    let users = UserService::new(store);
    let settings = SettingsService::new(users.clone(), localization.clone());

    let admins = StaticAdminList::new(config.admin_ids.clone());
    if admins.is_empty() {
        warn!("[WARN] BOT_ADMIN_USER_IDS is empty, admin commands are disabled");
    } else {
        info!("[OK] {} admin(s) configured", admins.len());
    }

    let data = Data {
        admins: Arc::new(admins),
        users,
        settings,
        localization,
        pagination_timeout: Duration::from_secs(config.pagination_timeout_secs),
    };

    let intents = GatewayIntents::non_privileged();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            pre_command: |ctx| Box::pin(pre_command(ctx)),
            event_handler: |ctx, event, _framework, data| {
                Box::pin(handle_event(ctx, event, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            let data = data.clone();
            Box::pin(async move {
                info!("[OK] Logged in as {}", ready.user.name);

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("[OK] Slash commands registered globally");

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::Client::builder(&config.token, intents)
        .framework(framework)
        .await
        .map_err(|e| BotError::Client(format!("Failed to create client: {}", e)))?;

    client
        .start()
        .await
        .map_err(|e| BotError::Client(format!("Failed to start client: {}", e)))?;

    Ok(())
}
