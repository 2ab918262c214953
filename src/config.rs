use crate::error::{BotError, Result};
use poise::serenity_prelude::UserId;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

const DEFAULT_USERS_FILE: &str = "data/users.json";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_PAGINATION_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub admin_ids: HashSet<UserId>,
    pub users_file: PathBuf,
    pub default_language: String,
    pub pagination_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TOKEN")
            .map_err(|_| BotError::Config("TOKEN not configured".to_string()))?;

        let admin_ids = parse_admin_ids(&env::var("BOT_ADMIN_USER_IDS").unwrap_or_default())?;

        let pagination_timeout_secs = match env::var("PAGINATION_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                BotError::Config(format!("PAGINATION_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_PAGINATION_TIMEOUT_SECS,
        };

        Ok(Self {
            token,
            admin_ids,
            users_file: env::var("USERS_FILE")
                .unwrap_or_else(|_| DEFAULT_USERS_FILE.to_string())
                .into(),
            default_language: env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            pagination_timeout_secs,
        })
    }
}

/// Parse a comma separated list of Discord user ids. Blank entries are skipped.
pub fn parse_admin_ids(raw: &str) -> Result<HashSet<UserId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .ok()
                .filter(|id| *id != 0)
                .map(UserId::new)
                .ok_or_else(|| {
                    BotError::Config(format!("BOT_ADMIN_USER_IDS contains an invalid id: {}", part))
                })
        })
        .collect()
}
