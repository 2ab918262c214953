use crate::commands::Data;
use crate::utils::embed;
use tracing::{error, warn};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Handle framework errors
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
            let data = ctx.data();
            let language_id = data.settings.get_user_language_id(ctx.author().id).await;
            let embed = embed::error(
                &data
                    .localization
                    .get_string(&language_id, "error.command_failed", &[]),
                &error.to_string(),
            );
            let _ = ctx.send(poise::CreateReply::default().embed(embed)).await;
        }
        poise::FrameworkError::CommandPanic { payload, ctx, .. } => {
            error!("Command '{}' panicked: {:?}", ctx.command().name, payload);
            let data = ctx.data();
            let language_id = data.settings.get_user_language_id(ctx.author().id).await;
            let embed = embed::error(
                &data
                    .localization
                    .get_string(&language_id, "error.command_failed", &[]),
                &data
                    .localization
                    .get_string(&language_id, "error.internal", &[]),
            );
            let _ = ctx.send(poise::CreateReply::default().embed(embed)).await;
        }
        error => {
            warn!("Other error: {:?}", error);
        }
    }
}
