use crate::commands::Data;
use serenity::all::{Context, FullEvent};
use tracing::{debug, info};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Main event handler for Discord events
pub async fn handle_event(_ctx: &Context, event: &FullEvent, _data: &Data) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!(
                "{} is connected to {} guild(s)",
                data_about_bot.user.name,
                data_about_bot.guilds.len()
            );
        }
        FullEvent::GuildCreate { guild, is_new } => {
            if *is_new == Some(true) {
                info!("Joined guild {} ({})", guild.name, guild.id);
            }
        }
        _ => {}
    }

    Ok(())
}

/// Runs before every command: log it and make sure the author has a record,
/// with their current name, so admin commands can find them later.
pub async fn pre_command(ctx: poise::Context<'_, Data, Error>) {
    let author = ctx.author();
    debug!(
        "Command '{}' invoked by {} ({})",
        ctx.command().qualified_name,
        author.name,
        author.id
    );
    ctx.data().users.ensure_user(author.id, &author.tag()).await;
}
