pub mod embed;
pub mod paginated_embed;
pub mod pagination;
pub mod users;

pub use paginated_embed::PaginatedEmbed;
pub use pagination::{Layout, Paginator, Row, DEFAULT_PAGE_SIZE};
