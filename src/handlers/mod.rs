pub mod error;
pub mod events;

pub use error::on_error;
pub use events::{handle_event, pre_command};
