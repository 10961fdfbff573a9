pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-exports for easy external access
pub use domain::entities::{Article, Author, Magazine};
pub use domain::repositories::CatalogRepository;
pub use domain::services::PublishingStats;
pub use infrastructure::persistence::InMemoryCatalog;
pub use shared::errors::{AppError, AppResult};
