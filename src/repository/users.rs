use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    poise::ChoiceParameter,
)]
pub enum BoosterKind {
    Basic,
    Promo,
}

impl BoosterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoosterKind::Basic => "Basic",
            BoosterKind::Promo => "Promo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language_id: Option<String>,
}

/// One persisted player. Missing fields fall back to defaults when loading,
/// so older files keep working after the record gains or loses a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: u64,
    pub name_tag: String,
    pub money: i64,
    pub boosters: BTreeMap<BoosterKind, u32>,
    pub cards: Vec<String>,
    pub settings: UserSettings,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(id: u64, name_tag: impl Into<String>) -> Self {
        Self {
            id,
            name_tag: name_tag.into(),
            created_at: Utc::now(),
            ..Default::default()
        }
    }

    pub fn collection_size(&self) -> usize {
        self.cards.len()
    }

    pub fn boosters_of(&self, kind: BoosterKind) -> u32 {
        self.boosters.get(&kind).copied().unwrap_or(0)
    }
}

pub type Users = BTreeMap<u64, UserRecord>;

/// Whole-file JSON store keyed by Discord user id.
#[derive(Debug)]
pub struct UserRepository {
    path: PathBuf,
    users: Users,
}

impl UserRepository {
    /// Load the store from `path`. A missing file is an empty store.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let users = match fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => Users::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Users::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, users })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.users.get(&id)
    }

    pub fn all(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Apply `change` to a copy of the users and persist it. The in-memory
    /// state is only replaced once the file has been written.
    ///
    /// `change` returns `None` when there is nothing to commit; the store is
    /// then left untouched and not rewritten.
    pub async fn transact<T, F>(&mut self, change: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Users) -> Option<T>,
    {
        let mut staged = self.users.clone();
        let Some(value) = change(&mut staged) else {
            return Ok(None);
        };

        write_users(&self.path, &staged).await?;
        self.users = staged;
        Ok(Some(value))
    }
}

async fn write_users(path: &Path, users: &Users) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_vec_pretty(users)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = UserRepository::load(dir.path().join("users.json")).await.unwrap();
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn committed_changes_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.json");

        let mut repo = UserRepository::load(&path).await.unwrap();
        repo.transact(|users| {
            let mut record = UserRecord::new(7, "alice");
            record.money = 250;
            record.cards.push("base-001".to_string());
            record.boosters.insert(BoosterKind::Promo, 3);
            users.insert(7, record);
            Some(())
        })
        .await
        .unwrap();

        let reloaded = UserRepository::load(&path).await.unwrap();
        let record = reloaded.get(7).unwrap();
        assert_eq!(record.name_tag, "alice");
        assert_eq!(record.money, 250);
        assert_eq!(record.cards, vec!["base-001".to_string()]);
        assert_eq!(record.boosters_of(BoosterKind::Promo), 3);
        assert_eq!(record.boosters_of(BoosterKind::Basic), 0);
    }

    #[tokio::test]
    async fn declined_change_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let mut repo = UserRepository::load(&path).await.unwrap();
        let result: Option<()> = repo
            .transact(|users| {
                users.insert(1, UserRecord::new(1, "ghost"));
                None
            })
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repo.get(1).is_none());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("users.json");
        std::fs::create_dir_all(path.join("blocker")).unwrap();

        let mut repo = UserRepository {
            path: path.clone(),
            users: Users::new(),
        };
        let result = repo
            .transact(|users| {
                users.insert(1, UserRecord::new(1, "bob"));
                Some(())
            })
            .await;

        assert!(result.is_err());
        assert!(repo.get(1).is_none());
    }

    #[tokio::test]
    async fn records_missing_fields_get_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"{"5": {"id": 5, "money": 10, "legacy_field": true}}"#).unwrap();

        let repo = UserRepository::load(&path).await.unwrap();
        let record = repo.get(5).unwrap();
        assert_eq!(record.money, 10);
        assert!(record.cards.is_empty());
        assert!(record.boosters.is_empty());
        assert_eq!(record.settings.language_id, None);
    }
}
