use crate::repository::{BoosterKind, UserRecord, UserStore, Users};
use async_trait::async_trait;
use poise::serenity_prelude::UserId;
use tracing::{debug, error, info};

/// Result of a user-data mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    NotFound,
    Unknown,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }
}

/// Everything the command layer may ask of the player store.
#[async_trait]
pub trait UserDataService: Send + Sync {
    async fn give_money(&self, user_id: UserId, amount: i64) -> Outcome;
    async fn give_all_money(&self, amount: i64) -> Outcome;
    async fn add_cards(&self, user_id: UserId, card_ids: &[String]) -> Outcome;
    async fn remove_card(&self, user_id: UserId, card_id: &str) -> Outcome;
    async fn give_boosters(&self, user_id: UserId, kind: BoosterKind, quantity: i64) -> Outcome;
    async fn give_all_boosters(&self, kind: BoosterKind, quantity: i64) -> Outcome;
    /// Every user, largest collection first. Ties keep the store's order.
    async fn get_top_users_collection(&self) -> Vec<UserRecord>;
}

#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Create the record if needed and keep the stored display name current.
    pub async fn ensure_user(&self, user_id: UserId, name_tag: &str) -> Outcome {
        {
            let repo = self.store.lock().await;
            if repo
                .get(user_id.get())
                .is_some_and(|record| record.name_tag == name_tag)
            {
                return Outcome::Ok;
            }
        }

        let outcome = self
            .mutate("ensure_user", |users| {
                let record = users
                    .entry(user_id.get())
                    .or_insert_with(|| UserRecord::new(user_id.get(), name_tag));
                record.name_tag = name_tag.to_string();
                Some(())
            })
            .await;
        if outcome.is_ok() {
            debug!("Registered user {} ({})", user_id, name_tag);
        }
        outcome
    }

    pub async fn get_user(&self, user_id: UserId) -> Option<UserRecord> {
        self.store.lock().await.get(user_id.get()).cloned()
    }

    pub async fn language_id(&self, user_id: UserId) -> Option<String> {
        self.store
            .lock()
            .await
            .get(user_id.get())
            .and_then(|record| record.settings.language_id.clone())
    }

    pub async fn set_language_id(&self, user_id: UserId, language_id: &str) -> Outcome {
        self.mutate("set_language_id", |users| {
            let record = users.get_mut(&user_id.get())?;
            record.settings.language_id = Some(language_id.to_string());
            Some(())
        })
        .await
    }

    async fn mutate<F>(&self, operation: &str, change: F) -> Outcome
    where
        F: FnOnce(&mut Users) -> Option<()>,
    {
        let mut repo = self.store.lock().await;
        match repo.transact(change).await {
            Ok(Some(())) => Outcome::Ok,
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                error!("Failed to persist {}: {}", operation, e);
                Outcome::Unknown
            }
        }
    }
}

fn add_money(record: &mut UserRecord, amount: i64) {
    record.money = record.money.saturating_add(amount).max(0);
}

fn add_boosters(record: &mut UserRecord, kind: BoosterKind, quantity: i64) {
    let current = i64::from(record.boosters_of(kind));
    let updated = current.saturating_add(quantity).clamp(0, i64::from(u32::MAX));
    record.boosters.insert(kind, updated as u32);
}

#[async_trait]
impl UserDataService for UserService {
    async fn give_money(&self, user_id: UserId, amount: i64) -> Outcome {
        let outcome = self
            .mutate("give_money", |users| {
                add_money(users.get_mut(&user_id.get())?, amount);
                Some(())
            })
            .await;
        info!("give_money user={} amount={} -> {:?}", user_id, amount, outcome);
        outcome
    }

    async fn give_all_money(&self, amount: i64) -> Outcome {
        let outcome = self
            .mutate("give_all_money", |users| {
                users.values_mut().for_each(|record| add_money(record, amount));
                Some(())
            })
            .await;
        info!("give_all_money amount={} -> {:?}", amount, outcome);
        outcome
    }

    async fn add_cards(&self, user_id: UserId, card_ids: &[String]) -> Outcome {
        let outcome = self
            .mutate("add_cards", |users| {
                let record = users.get_mut(&user_id.get())?;
                record.cards.extend(card_ids.iter().cloned());
                Some(())
            })
            .await;
        info!("add_cards user={} cards={:?} -> {:?}", user_id, card_ids, outcome);
        outcome
    }

    async fn remove_card(&self, user_id: UserId, card_id: &str) -> Outcome {
        let outcome = self
            .mutate("remove_card", |users| {
                let record = users.get_mut(&user_id.get())?;
                let position = record.cards.iter().position(|card| card == card_id)?;
                record.cards.remove(position);
                Some(())
            })
            .await;
        info!("remove_card user={} card={} -> {:?}", user_id, card_id, outcome);
        outcome
    }

    async fn give_boosters(&self, user_id: UserId, kind: BoosterKind, quantity: i64) -> Outcome {
        let outcome = self
            .mutate("give_boosters", |users| {
                add_boosters(users.get_mut(&user_id.get())?, kind, quantity);
                Some(())
            })
            .await;
        info!(
            "give_boosters user={} kind={} quantity={} -> {:?}",
            user_id, kind.as_str(), quantity, outcome
        );
        outcome
    }

    async fn give_all_boosters(&self, kind: BoosterKind, quantity: i64) -> Outcome {
        let outcome = self
            .mutate("give_all_boosters", |users| {
                users
                    .values_mut()
                    .for_each(|record| add_boosters(record, kind, quantity));
                Some(())
            })
            .await;
        info!(
            "give_all_boosters kind={} quantity={} -> {:?}",
            kind.as_str(),
            quantity,
            outcome
        );
        outcome
    }

    async fn get_top_users_collection(&self) -> Vec<UserRecord> {
        let repo = self.store.lock().await;
        let mut users: Vec<UserRecord> = repo.all().cloned().collect();
        users.sort_by(|a, b| b.collection_size().cmp(&a.collection_size()));
        users
    }
}
