use crate::commands::Data;
use crate::utils::embed::COLOR_INFO;
use crate::utils::pagination::{Layout, Navigation, Paginator};
use poise::serenity_prelude::{
    ButtonStyle, ComponentInteractionCollector, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, UserId,
};
use std::time::Duration;
use tracing::debug;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

const BLANK: &str = "\u{200b}";

/// What a button press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Not one of this session's buttons.
    Foreign,
    /// Someone other than the invoker pressed a button.
    Rejected,
    /// Pressed at the first or last page.
    Unchanged,
    Moved,
}

/// Embed + previous/next buttons over a [`Paginator`], only steerable by
/// the user who ran the command.
pub struct PaginatedEmbed {
    paginator: Paginator,
    invoker: UserId,
    prev_id: String,
    next_id: String,
    footer_template: String,
    not_allowed: String,
}

impl PaginatedEmbed {
    pub fn new(session_id: u64, invoker: UserId, paginator: Paginator) -> Self {
        Self {
            paginator,
            invoker,
            prev_id: format!("{}prev", session_id),
            next_id: format!("{}next", session_id),
            footer_template: "Page {current}/{total}".to_string(),
            not_allowed: "You are not allowed to do that.".to_string(),
        }
    }

    pub fn from_context(ctx: Context<'_>, paginator: Paginator) -> Self {
        Self::new(ctx.id(), ctx.author().id, paginator)
    }

    /// Footer text; `{current}` and `{total}` are replaced with page numbers.
    pub fn footer_template(mut self, template: impl Into<String>) -> Self {
        self.footer_template = template.into();
        self
    }

    /// Ephemeral reply shown to anyone but the invoker.
    pub fn not_allowed_text(mut self, text: impl Into<String>) -> Self {
        self.not_allowed = text.into();
        self
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn footer_text(&self) -> String {
        self.footer_template
            .replace("{current}", &(self.paginator.current_index() + 1).to_string())
            .replace("{total}", &self.paginator.page_count().to_string())
    }

    /// Embed fields for the current page as `(name, value, inline)`.
    pub fn fields(&self) -> Vec<(String, String, bool)> {
        let page = self.paginator.current_page();
        let non_empty = |s: &str| {
            if s.is_empty() {
                BLANK.to_string()
            } else {
                s.to_string()
            }
        };

        match self.paginator.layout() {
            Layout::Expanded => page
                .iter()
                .map(|row| (non_empty(&row.label), non_empty(&row.value), false))
                .collect(),
            Layout::Compact => {
                let mut fields = Vec::with_capacity(page.len() + page.len() / 2);
                for (i, row) in page.iter().enumerate() {
                    fields.push((non_empty(&row.label), non_empty(&row.value), true));
                    // Discord fits three inline fields per line; a spacer keeps it to two.
                    if i % 2 == 1 && i + 1 < page.len() {
                        fields.push((BLANK.to_string(), BLANK.to_string(), true));
                    }
                }
                fields
            }
        }
    }

    pub fn embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .color(COLOR_INFO)
            .fields(self.fields())
            .footer(CreateEmbedFooter::new(self.footer_text()));
        if let Some(title) = self.paginator.title() {
            embed = embed.title(title);
        }
        embed
    }

    pub fn components(&self) -> Vec<CreateActionRow> {
        vec![CreateActionRow::Buttons(vec![
            CreateButton::new(&self.prev_id)
                .label("◀")
                .style(ButtonStyle::Secondary)
                .disabled(self.paginator.is_first()),
            CreateButton::new(&self.next_id)
                .label("▶")
                .style(ButtonStyle::Secondary)
                .disabled(self.paginator.is_last()),
        ])]
    }

    pub fn press(&mut self, activator: UserId, custom_id: &str) -> PressOutcome {
        let navigation = if custom_id == self.prev_id {
            Navigation::Previous
        } else if custom_id == self.next_id {
            Navigation::Next
        } else {
            return PressOutcome::Foreign;
        };

        if activator != self.invoker {
            return PressOutcome::Rejected;
        }

        if self.paginator.navigate(navigation) {
            PressOutcome::Moved
        } else {
            PressOutcome::Unchanged
        }
    }

    /// Reply with the first page and serve button presses until the session
    /// sits idle for `timeout`, then drop the buttons.
    pub async fn send(mut self, ctx: Context<'_>, timeout: Duration) -> Result<(), Error> {
        if self.paginator.page_count() == 1 {
            ctx.send(poise::CreateReply::default().embed(self.embed()))
                .await?;
            return Ok(());
        }

        let reply = ctx
            .send(
                poise::CreateReply::default()
                    .embed(self.embed())
                    .components(self.components()),
            )
            .await?;
        let message_id = reply.message().await?.id;

        while let Some(press) =
            ComponentInteractionCollector::new(ctx.serenity_context().shard.clone())
                .message_id(message_id)
                .timeout(timeout)
                .await
        {
            let response = match self.press(press.user.id, &press.data.custom_id) {
                PressOutcome::Foreign => continue,
                PressOutcome::Rejected => {
                    debug!(
                        "Rejected page press by {} on message {} (owner {})",
                        press.user.id, message_id, self.invoker
                    );
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(&self.not_allowed)
                            .ephemeral(true),
                    )
                }
                PressOutcome::Unchanged => CreateInteractionResponse::Acknowledge,
                PressOutcome::Moved => CreateInteractionResponse::UpdateMessage(
                    CreateInteractionResponseMessage::new()
                        .embed(self.embed())
                        .components(self.components()),
                ),
            };
            press.create_response(ctx.http(), response).await?;
        }

        reply
            .edit(
                ctx,
                poise::CreateReply::default()
                    .embed(self.embed())
                    .components(vec![]),
            )
            .await?;
        Ok(())
    }
}
