pub mod connection;
pub mod users;

pub use connection::{open_store, UserStore};
pub use users::{BoosterKind, UserRecord, UserRepository, UserSettings, Users};
