use crate::repository::BoosterKind;
use crate::services::{AdminCheck, Outcome, Text, UserDataService};
use crate::utils::embed;
use poise::serenity_prelude::{self as serenity, UserId};
use tracing::warn;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, super::Data, Error>;

/// The member an admin command acts on.
#[derive(Debug, Clone)]
pub struct Target {
    pub id: UserId,
    pub name: String,
}

impl Target {
    /// How the member is shown in replies, e.g. `42 (alice)`.
    pub fn display(&self) -> String {
        format!("{} ({})", self.id, self.name)
    }
}

impl From<&serenity::User> for Target {
    fn from(user: &serenity::User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminReply {
    Done(Text),
    Refused,
    Failed(Text),
}

impl AdminReply {
    pub fn text(&self) -> Text {
        match self {
            AdminReply::Done(text) | AdminReply::Failed(text) => text.clone(),
            AdminReply::Refused => Text::new("common.not_allowed"),
        }
    }

    fn from_outcome(outcome: Outcome, success: Text, not_found_key: &'static str) -> Self {
        match outcome {
            Outcome::Ok => AdminReply::Done(success),
            Outcome::NotFound => AdminReply::Failed(Text::new(not_found_key)),
            Outcome::Unknown => AdminReply::Failed(Text::new("common.unknown_issue")),
        }
    }
}

/// Privilege check followed by exactly one user-data mutation.
pub struct AdminActions<'a> {
    admins: &'a dyn AdminCheck,
    users: &'a dyn UserDataService,
}

impl<'a> AdminActions<'a> {
    pub fn new(admins: &'a dyn AdminCheck, users: &'a dyn UserDataService) -> Self {
        Self { admins, users }
    }

    fn allowed(&self, caller: UserId, command: &str) -> bool {
        let allowed = self.admins.is_admin(caller);
        if !allowed {
            warn!("User {} tried to run {} without permission", caller, command);
        }
        allowed
    }

    pub async fn give_money(&self, caller: UserId, target: &Target, amount: i64) -> AdminReply {
        if !self.allowed(caller, "give_money") {
            return AdminReply::Refused;
        }
        let outcome = self.users.give_money(target.id, amount).await;
        AdminReply::from_outcome(
            outcome,
            Text::new("give_money_cmd.response_msg")
                .arg("user", target.display())
                .arg("amount", amount),
            "common.user_not_found",
        )
    }

    pub async fn give_all_money(&self, caller: UserId, amount: i64) -> AdminReply {
        if !self.allowed(caller, "give_all_money") {
            return AdminReply::Refused;
        }
        let outcome = self.users.give_all_money(amount).await;
        AdminReply::from_outcome(
            outcome,
            Text::new("give_all_money_cmd.response_msg").arg("amount", amount),
            "common.unknown_issue",
        )
    }

    pub async fn give_card(&self, caller: UserId, target: &Target, card_id: &str) -> AdminReply {
        if !self.allowed(caller, "give_card") {
            return AdminReply::Refused;
        }
        let outcome = self.users.add_cards(target.id, &[card_id.to_string()]).await;
        AdminReply::from_outcome(
            outcome,
            Text::new("give_card_cmd.response_msg")
                .arg("user", target.display())
                .arg("card_id", card_id),
            "common.user_not_found",
        )
    }

    pub async fn remove_card(&self, caller: UserId, target: &Target, card_id: &str) -> AdminReply {
        if !self.allowed(caller, "remove_card") {
            return AdminReply::Refused;
        }
        let outcome = self.users.remove_card(target.id, card_id).await;
        AdminReply::from_outcome(
            outcome,
            Text::new("remove_card_cmd.response_msg")
                .arg("user", target.display())
                .arg("card_id", card_id),
            "common.user_or_card_not_found",
        )
    }

    pub async fn give_boosters(
        &self,
        caller: UserId,
        target: &Target,
        kind: BoosterKind,
        quantity: i64,
    ) -> AdminReply {
        if !self.allowed(caller, "give_boosters") {
            return AdminReply::Refused;
        }
        let outcome = self.users.give_boosters(target.id, kind, quantity).await;
        AdminReply::from_outcome(
            outcome,
            Text::new("give_boosters_cmd.response_msg")
                .arg("user", target.display())
                .arg("kind", kind.as_str())
                .arg("quantity", quantity),
            "common.user_not_found",
        )
    }

    pub async fn give_all_boosters(
        &self,
        caller: UserId,
        kind: BoosterKind,
        quantity: i64,
    ) -> AdminReply {
        if !self.allowed(caller, "give_all_boosters") {
            return AdminReply::Refused;
        }
        let outcome = self.users.give_all_boosters(kind, quantity).await;
        AdminReply::from_outcome(
            outcome,
            Text::new("give_all_boosters_cmd.response_msg")
                .arg("kind", kind.as_str())
                .arg("quantity", quantity),
            "common.unknown_issue",
        )
    }
}

fn actions(data: &super::Data) -> AdminActions<'_> {
    AdminActions::new(data.admins.as_ref(), &data.users)
}

async fn respond(ctx: Context<'_>, reply: AdminReply) -> Result<(), Error> {
    let data = ctx.data();
    let language_id = data.settings.get_user_language_id(ctx.author().id).await;
    let message = data.localization.render(&language_id, &reply.text());

    let embed = match reply {
        AdminReply::Done(_) => embed::success(&message),
        AdminReply::Refused | AdminReply::Failed(_) => embed::warning(&message),
    };
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Give or take money to the user
#[poise::command(slash_command, category = "Admin")]
pub async fn give_money(
    ctx: Context<'_>,
    #[description = "Member to credit"] member: serenity::User,
    #[description = "Amount of money, negative to take"] money: i64,
) -> Result<(), Error> {
    let reply = actions(ctx.data())
        .give_money(ctx.author().id, &Target::from(&member), money)
        .await;
    respond(ctx, reply).await
}

/// Give or take money to every users
#[poise::command(slash_command, category = "Admin")]
pub async fn give_all_money(
    ctx: Context<'_>,
    #[description = "Amount of money, negative to take"] money: i64,
) -> Result<(), Error> {
    let reply = actions(ctx.data())
        .give_all_money(ctx.author().id, money)
        .await;
    respond(ctx, reply).await
}

/// Give a card to the user
#[poise::command(slash_command, category = "Admin")]
pub async fn give_card(
    ctx: Context<'_>,
    #[description = "Member receiving the card"] member: serenity::User,
    #[description = "Card identifier"] card_id: String,
) -> Result<(), Error> {
    let reply = actions(ctx.data())
        .give_card(ctx.author().id, &Target::from(&member), card_id.trim())
        .await;
    respond(ctx, reply).await
}

/// Remove a card from the user
#[poise::command(slash_command, category = "Admin")]
pub async fn remove_card(
    ctx: Context<'_>,
    #[description = "Member losing the card"] member: serenity::User,
    #[description = "Card identifier"] card_id: String,
) -> Result<(), Error> {
    let reply = actions(ctx.data())
        .remove_card(ctx.author().id, &Target::from(&member), card_id.trim())
        .await;
    respond(ctx, reply).await
}

/// Give some boosters to the user
#[poise::command(slash_command, category = "Admin")]
pub async fn give_boosters(
    ctx: Context<'_>,
    #[description = "Member receiving the boosters"] member: serenity::User,
    #[description = "Booster kind"] kind: BoosterKind,
    #[description = "Number of boosters, negative to take"] quantity: i64,
) -> Result<(), Error> {
    let reply = actions(ctx.data())
        .give_boosters(ctx.author().id, &Target::from(&member), kind, quantity)
        .await;
    respond(ctx, reply).await
}

/// Give some boosters to every users
#[poise::command(slash_command, category = "Admin")]
pub async fn give_all_boosters(
    ctx: Context<'_>,
    #[description = "Booster kind"] kind: BoosterKind,
    #[description = "Number of boosters, negative to take"] quantity: i64,
) -> Result<(), Error> {
    let reply = actions(ctx.data())
        .give_all_boosters(ctx.author().id, kind, quantity)
        .await;
    respond(ctx, reply).await
}
