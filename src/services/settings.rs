use crate::services::localization::Localization;
use crate::services::user::{Outcome, UserService};
use poise::serenity_prelude::UserId;
use std::sync::Arc;

/// Resolves which language a user reads replies in.
#[derive(Clone)]
pub struct SettingsService {
    users: UserService,
    localization: Arc<Localization>,
}

impl SettingsService {
    pub fn new(users: UserService, localization: Arc<Localization>) -> Self {
        Self {
            users,
            localization,
        }
    }

    pub async fn get_user_language_id(&self, user_id: UserId) -> String {
        self.users
            .language_id(user_id)
            .await
            .filter(|id| self.localization.has_language(id))
            .unwrap_or_else(|| self.localization.default_language().to_string())
    }

    pub async fn set_user_language_id(&self, user_id: UserId, language_id: &str) -> Outcome {
        if !self.localization.has_language(language_id) {
            return Outcome::NotFound;
        }
        self.users.set_language_id(user_id, language_id).await
    }
}
