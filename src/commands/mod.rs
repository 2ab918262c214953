pub mod admin;
pub mod language;
pub mod rankings;

use crate::services::{AdminCheck, Localization, SettingsService, UserService};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct Data {
    pub admins: Arc<dyn AdminCheck>,
    pub users: UserService,
    pub settings: SettingsService,
    pub localization: Arc<Localization>,
    pub pagination_timeout: Duration,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("localization", &self.localization)
            .field("pagination_timeout", &self.pagination_timeout)
            .finish_non_exhaustive()
    }
}

pub fn all() -> Vec<poise::Command<Data, Box<dyn std::error::Error + Send + Sync>>> {
    vec![
        // Admin commands
        admin::give_money(),
        admin::give_all_money(),
        admin::give_card(),
        admin::remove_card(),
        admin::give_boosters(),
        admin::give_all_boosters(),
        // Player commands
        rankings::rankings(),
        language::language(),
    ]
}
