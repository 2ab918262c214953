pub mod admin;
pub mod localization;
pub mod settings;
pub mod user;

pub use admin::{AdminCheck, StaticAdminList};
pub use localization::{Localization, Text};
pub use settings::SettingsService;
pub use user::{Outcome, UserDataService, UserService};
