use crate::repository::UserRecord;
use crate::services::UserDataService;
use crate::utils::users::fetch_users_by_id;
use crate::utils::{Layout, PaginatedEmbed, Paginator, Row, DEFAULT_PAGE_SIZE};
use poise::serenity_prelude::UserId;
use std::collections::HashMap;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, super::Data, Error>;

pub const RANKING_PAGE_SIZE: usize = DEFAULT_PAGE_SIZE;

/// Rank is the position in `users`, not recomputed from the card counts.
pub fn ranking_rows(users: &[UserRecord], fetched_names: &HashMap<u64, String>) -> Vec<Row> {
    users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let name = if user.name_tag.is_empty() {
                fetched_names
                    .get(&user.id)
                    .cloned()
                    .unwrap_or_else(|| user.id.to_string())
            } else {
                user.name_tag.clone()
            };
            Row::new(
                format!("{}: {}", i + 1, name),
                user.collection_size().to_string(),
            )
        })
        .collect()
}

/// Get the top users having the most cards
#[poise::command(slash_command)]
pub async fn rankings(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let language_id = data.settings.get_user_language_id(ctx.author().id).await;

    let users = data.users.get_top_users_collection().await;

    let unnamed = users
        .iter()
        .filter(|user| user.name_tag.is_empty() && user.id != 0)
        .map(|user| UserId::new(user.id));
    let fetched_names: HashMap<u64, String> = fetch_users_by_id(ctx.http(), unnamed)
        .await
        .into_iter()
        .map(|(id, user)| (id.get(), user.tag()))
        .collect();

    let title = format!(
        "---------- {} ----------",
        data.localization.get_string(&language_id, "ranking_cmd.title", &[])
    );
    let paginator = Paginator::new(
        ranking_rows(&users, &fetched_names),
        Layout::Compact,
        RANKING_PAGE_SIZE,
        Some(title),
    );

    PaginatedEmbed::from_context(ctx, paginator)
        .footer_template(data.localization.get_string(&language_id, "common.page", &[]))
        .not_allowed_text(data.localization.get_string(&language_id, "common.not_allowed", &[]))
        .send(ctx, data.pagination_timeout)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, cards: usize) -> UserRecord {
        let mut record = UserRecord::new(id, name);
        record.cards = (0..cards).map(|i| format!("c{}", i)).collect();
        record
    }

    #[test]
    fn ranks_are_positional() {
        let users = vec![user(1, "A", 5), user(2, "B", 5), user(3, "C", 3)];
        let rows = ranking_rows(&users, &HashMap::new());
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1: A", "2: B", "3: C"]);
        assert_eq!(rows[0].value, "5");
        assert_eq!(rows[2].value, "3");

        let swapped = vec![user(2, "B", 5), user(1, "A", 5), user(3, "C", 3)];
        let rows = ranking_rows(&swapped, &HashMap::new());
        assert_eq!(rows[0].label, "1: B");
        assert_eq!(rows[1].label, "2: A");
    }

    #[test]
    fn missing_names_use_fetched_name_then_id() {
        let users = vec![user(7, "", 1), user(8, "", 0)];
        let fetched = HashMap::from([(7, "seven".to_string())]);
        let rows = ranking_rows(&users, &fetched);
        assert_eq!(rows[0].label, "1: seven");
        assert_eq!(rows[1].label, "2: 8");
    }

    #[test]
    fn fourteen_players_span_two_pages() {
        let users: Vec<UserRecord> = (1..=14).map(|i| user(i, "p", 1)).collect();
        let paginator = Paginator::new(
            ranking_rows(&users, &HashMap::new()),
            Layout::Compact,
            RANKING_PAGE_SIZE,
            None,
        );
        assert_eq!(paginator.page_count(), 2);
        assert_eq!(paginator.current_page().len(), 12);
    }
}
