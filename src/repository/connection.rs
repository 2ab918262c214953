use crate::error::Result;
use crate::repository::users::UserRepository;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub type UserStore = Arc<Mutex<UserRepository>>;

pub async fn open_store(path: impl AsRef<Path>) -> Result<UserStore> {
    let repo = UserRepository::load(path).await?;
    info!(
        "User store loaded from {} ({} users)",
        repo.path().display(),
        repo.len()
    );
    Ok(Arc::new(Mutex::new(repo)))
}
