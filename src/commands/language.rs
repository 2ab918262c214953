use crate::services::{Outcome, Text};
use crate::utils::embed;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, super::Data, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum Language {
    #[name = "English"]
    English,
    #[name = "Français"]
    French,
}

impl Language {
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }
}

fn reply_text(outcome: Outcome) -> Text {
    match outcome {
        Outcome::Ok => Text::new("language_cmd.response_msg"),
        Outcome::NotFound => Text::new("common.user_not_found"),
        Outcome::Unknown => Text::new("common.unknown_issue"),
    }
}

/// Choose the language the bot answers you in
#[poise::command(slash_command)]
pub async fn language(
    ctx: Context<'_>,
    #[description = "Language"] language: Language,
) -> Result<(), Error> {
    let data = ctx.data();
    let outcome = data
        .settings
        .set_user_language_id(ctx.author().id, language.id())
        .await;

    let language_id = data.settings.get_user_language_id(ctx.author().id).await;
    let message = data.localization.render(&language_id, &reply_text(outcome));
    let embed = if outcome.is_ok() {
        embed::success(&message)
    } else {
        embed::warning(&message)
    };

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Localization;

    #[test]
    fn every_choice_has_a_locale() {
        let l10n = Localization::builtin("en").unwrap();
        for language in [Language::English, Language::French] {
            assert!(l10n.has_language(language.id()));
        }
    }

    #[test]
    fn confirmation_is_rendered_in_the_new_language() {
        let l10n = Localization::builtin("en").unwrap();
        let message = l10n.render(Language::French.id(), &reply_text(Outcome::Ok));
        assert!(message.contains("français"));
    }
}
